use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;

use crate::domain::{
    catalog::{
        entities::{NewProduct, Product},
        ports::ProductRepository,
    },
    common::{entities::app_errors::CoreError, pagination::PageRequest},
};
use crate::entity::products;
use crate::infrastructure::{
    catalog::predicates::{price_between, price_goe},
    predicates::{all_of, filter_all},
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let created = products::ActiveModel {
            name: Set(product.name),
            price: Set(product.price),
            category: Set(product.category),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create product: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Product::from(created))
    }

    async fn find_by_id(&self, product_id: i64) -> Result<Option<Product>, CoreError> {
        let product = products::Entity::find_by_id(product_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn find_by_min_price(
        &self,
        min_price: Option<i64>,
        page: PageRequest,
    ) -> Result<Vec<Product>, CoreError> {
        let products = filter_all(products::Entity::find(), all_of([price_goe(min_price)]))
            .order_by_asc(products::Column::Id)
            .offset(page.offset())
            .limit(page.size())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Product::from)
            .collect::<Vec<Product>>();

        Ok(products)
    }

    async fn find_by_price_range(
        &self,
        min_price: i64,
        max_price: i64,
    ) -> Result<Vec<Product>, CoreError> {
        let products = products::Entity::find()
            .filter(price_between(min_price, max_price))
            .order_by_asc(products::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch products by price range: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Product::from)
            .collect::<Vec<Product>>();

        Ok(products)
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        let result = products::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete all products: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}
