use std::collections::BTreeMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    sea_query::{Alias, Expr, Func, SimpleExpr},
};
use tracing::error;

use crate::domain::{
    catalog::{
        entities::{NewOrder, Order},
        ports::OrderRepository,
        value_objects::{OrderStatusSummary, OrderSummary, ProductOrderCount},
    },
    common::{entities::app_errors::CoreError, pagination::PageRequest},
};
use crate::entity::{orders, products};
use crate::infrastructure::{
    catalog::{
        mappers::{OrderStatusRow, OrderSummaryRow, ProductOrderCountRow},
        predicates::{order_of_product, status_eq},
    },
    predicates::{all_of, filter_all},
};

#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pub db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `SUM` of a bigint column is numeric on PostgreSQL.
fn sum_as_bigint(column: orders::Column) -> SimpleExpr {
    Expr::expr(Func::sum(Expr::col((orders::Entity, column)))).cast_as(Alias::new("bigint"))
}

fn count_orders() -> SimpleExpr {
    Expr::expr(Func::count(Expr::col((orders::Entity, orders::Column::Id))))
        .cast_as(Alias::new("bigint"))
}

fn active_model(order: NewOrder) -> orders::ActiveModel {
    orders::ActiveModel {
        order_date: Set(order.order_date),
        quantity: Set(order.quantity),
        total_price: Set(order.total_price),
        status: Set(order.status.as_str().to_string()),
        product_id: Set(order.product_id),
        ..Default::default()
    }
}

impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, CoreError> {
        let created = active_model(order).insert(&self.db).await.map_err(|e| {
            error!("Failed to create order: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Order::from(created))
    }

    async fn create_many(&self, orders: Vec<NewOrder>) -> Result<u64, CoreError> {
        if orders.is_empty() {
            return Ok(0);
        }

        orders::Entity::insert_many(orders.into_iter().map(active_model))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create orders: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn summarize_product(
        &self,
        product_id: i64,
        status: Option<String>,
    ) -> Result<Option<OrderSummary>, CoreError> {
        let query = orders::Entity::find()
            .select_only()
            .column_as(sum_as_bigint(orders::Column::Quantity), "quantity")
            .column_as(sum_as_bigint(orders::Column::TotalPrice), "sum");

        let row = filter_all(
            query,
            all_of([Some(order_of_product(product_id)), status_eq(status.as_deref())]),
        )
        .into_model::<OrderSummaryRow>()
        .one(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to summarize orders of product: {}", e);
            CoreError::InternalServerError
        })?;

        let summary = row.and_then(|row| match (row.quantity, row.sum) {
            (Some(quantity), Some(sum)) => Some(OrderSummary {
                product_id,
                quantity,
                sum,
            }),
            _ => None,
        });

        Ok(summary)
    }

    async fn summarize_by_status(
        &self,
    ) -> Result<BTreeMap<String, OrderStatusSummary>, CoreError> {
        let rows = orders::Entity::find()
            .select_only()
            .column(orders::Column::Status)
            .column_as(count_orders(), "order_count")
            .column_as(sum_as_bigint(orders::Column::TotalPrice), "total_amount")
            .group_by(orders::Column::Status)
            .order_by_asc(orders::Column::Status)
            .into_model::<OrderStatusRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to summarize orders by status: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .iter()
            .map(|row| (row.status.clone(), OrderStatusSummary::from(row)))
            .collect())
    }

    async fn find_by_product(
        &self,
        product_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Order>, CoreError> {
        let orders = orders::Entity::find()
            .filter(order_of_product(product_id))
            .order_by_asc(orders::Column::Id)
            .offset(page.offset())
            .limit(page.size())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch orders of product: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Order::from)
            .collect::<Vec<Order>>();

        Ok(orders)
    }

    async fn count_for_product(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductOrderCount>, CoreError> {
        let row = orders::Entity::find()
            .select_only()
            .column_as(products::Column::Id, "product_id")
            .column_as(products::Column::Name, "product_name")
            .column_as(count_orders(), "order_count")
            .join(JoinType::InnerJoin, orders::Relation::Product.def())
            .group_by(products::Column::Id)
            .group_by(products::Column::Name)
            .having(products::Column::Id.eq(product_id))
            .into_model::<ProductOrderCountRow>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count orders of product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(row.map(ProductOrderCount::from))
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        let result = orders::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete all orders: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
