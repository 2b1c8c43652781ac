use std::collections::BTreeMap;

use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    catalog::{
        entities::{NewOrder, NewProduct, Order, Product},
        ports::{CatalogService, OrderRepository, ProductRepository},
        value_objects::{
            CreateOrderInput, CreateProductInput, OrderProduct, OrderResponse,
            OrderStatusSummary, OrderSummary, ProductOrderCount,
        },
    },
    common::{
        entities::app_errors::CoreError, has_text, pagination::PageRequest, services::Service,
    },
    health::ports::HealthCheckRepository,
    member::ports::MemberRepository,
    team::ports::TeamRepository,
};

impl<M, T, P, O, HC> CatalogService for Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(name = %input.name, category = %input.category))]
    async fn create_product(&self, input: CreateProductInput) -> Result<Product, CoreError> {
        if !has_text(&input.name) || !has_text(&input.category) {
            return Err(CoreError::InvalidInput(
                "product name and category must not be blank".to_string(),
            ));
        }

        if input.price < 0 {
            return Err(CoreError::InvalidInput("price must not be negative".to_string()));
        }

        self.product_repository
            .create(NewProduct {
                name: input.name,
                price: input.price,
                category: input.category,
            })
            .await
    }

    #[instrument(skip(self, input), fields(product_id = input.product_id, status = %input.status))]
    async fn create_order(&self, input: CreateOrderInput) -> Result<Order, CoreError> {
        if input.quantity <= 0 {
            return Err(CoreError::InvalidInput("quantity must be positive".to_string()));
        }

        let product = self
            .product_repository
            .find_by_id(input.product_id)
            .await?
            .ok_or_else(|| {
                CoreError::InvalidInput(format!("product {} does not exist", input.product_id))
            })?;

        let total_price = match input.total_price {
            Some(total_price) => total_price,
            None => product.price.checked_mul(input.quantity).ok_or_else(|| {
                CoreError::InvalidInput("total price overflows".to_string())
            })?,
        };

        self.order_repository
            .create(NewOrder {
                order_date: input
                    .order_date
                    .unwrap_or_else(|| Utc::now().date_naive()),
                quantity: input.quantity,
                total_price,
                status: input.status,
                product_id: product.id,
            })
            .await
    }

    #[instrument(skip(self))]
    async fn get_products(
        &self,
        min_price: Option<i64>,
        page: PageRequest,
    ) -> Result<Vec<Product>, CoreError> {
        self.product_repository
            .find_by_min_price(min_price, page)
            .await
    }

    #[instrument(skip(self))]
    async fn get_order_summary(
        &self,
        product_id: i64,
        status: Option<String>,
    ) -> Result<Option<OrderSummary>, CoreError> {
        let status = status.filter(|s| has_text(s));
        self.order_repository
            .summarize_product(product_id, status)
            .await
    }

    #[instrument(skip(self))]
    async fn get_product_price_range(
        &self,
        min_price: i64,
        max_price: i64,
    ) -> Result<Vec<Product>, CoreError> {
        if min_price > max_price {
            return Err(CoreError::InvalidInput(format!(
                "min_price {min_price} is greater than max_price {max_price}"
            )));
        }

        self.product_repository
            .find_by_price_range(min_price, max_price)
            .await
    }

    #[instrument(skip(self))]
    async fn get_order_statistics_by_status(
        &self,
    ) -> Result<BTreeMap<String, OrderStatusSummary>, CoreError> {
        self.order_repository.summarize_by_status().await
    }

    #[instrument(skip(self))]
    async fn get_order_products(
        &self,
        product_id: i64,
        page: PageRequest,
    ) -> Result<OrderProduct, CoreError> {
        let orders = self
            .order_repository
            .find_by_product(product_id, page)
            .await?;

        Ok(OrderProduct {
            product_id,
            order_responses: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }

    #[instrument(skip(self))]
    async fn get_product_order_count(
        &self,
        product_id: i64,
    ) -> Result<Option<ProductOrderCount>, CoreError> {
        self.order_repository.count_for_product(product_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        catalog::{
            entities::OrderStatus,
            ports::{MockOrderRepository, MockProductRepository},
        },
        health::ports::MockHealthCheckRepository,
        member::ports::MockMemberRepository,
        team::ports::MockTeamRepository,
    };

    fn service(
        products: MockProductRepository,
        orders: MockOrderRepository,
    ) -> Service<
        MockMemberRepository,
        MockTeamRepository,
        MockProductRepository,
        MockOrderRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockMemberRepository::new(),
            MockTeamRepository::new(),
            products,
            orders,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_price_range_rejects_inverted_bounds() {
        let mut products = MockProductRepository::new();
        products.expect_find_by_price_range().never();

        let result = service(products, MockOrderRepository::new())
            .get_product_price_range(500, 100)
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_order_summary_passes_through_absence() {
        let mut orders = MockOrderRepository::new();
        orders
            .expect_summarize_product()
            .with(eq(3), eq(Some("SHIPPED".to_string())))
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let summary = service(MockProductRepository::new(), orders)
            .get_order_summary(3, Some("SHIPPED".to_string()))
            .await
            .unwrap();

        assert_eq!(summary, None);
    }

    #[tokio::test]
    async fn test_create_order_defaults_total_price() {
        let mut products = MockProductRepository::new();
        products.expect_find_by_id().returning(|product_id| {
            Box::pin(async move {
                Ok(Some(Product {
                    id: product_id,
                    name: "desk".to_string(),
                    price: 250,
                    category: "furniture".to_string(),
                }))
            })
        });

        let mut orders = MockOrderRepository::new();
        orders.expect_create().returning(|order| {
            Box::pin(async move {
                Ok(Order {
                    id: 1,
                    order_date: order.order_date,
                    quantity: order.quantity,
                    total_price: order.total_price,
                    status: order.status.to_string(),
                    product_id: order.product_id,
                })
            })
        });

        let order = service(products, orders)
            .create_order(CreateOrderInput {
                product_id: 4,
                quantity: 3,
                total_price: None,
                status: OrderStatus::Processing,
                order_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            })
            .await
            .unwrap();

        assert_eq!(order.total_price, 750);
        assert_eq!(order.status, "PROCESSING");
        assert_eq!(order.product_id, 4);
    }

    #[tokio::test]
    async fn test_create_order_for_missing_product() {
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let mut orders = MockOrderRepository::new();
        orders.expect_create().never();

        let result = service(products, orders)
            .create_order(CreateOrderInput {
                product_id: 99,
                quantity: 1,
                total_price: Some(10),
                status: OrderStatus::Shipped,
                order_date: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
