use std::collections::BTreeMap;

use crate::domain::{
    catalog::{
        entities::{NewOrder, NewProduct, Order, Product},
        value_objects::{
            CreateOrderInput, CreateProductInput, OrderProduct, OrderStatusSummary, OrderSummary,
            ProductOrderCount,
        },
    },
    common::{entities::app_errors::CoreError, pagination::PageRequest},
};

#[cfg_attr(test, mockall::automock)]
pub trait CatalogService: Send + Sync {
    fn create_product(
        &self,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn create_order(
        &self,
        input: CreateOrderInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn get_products(
        &self,
        min_price: Option<i64>,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_order_summary(
        &self,
        product_id: i64,
        status: Option<String>,
    ) -> impl Future<Output = Result<Option<OrderSummary>, CoreError>> + Send;

    fn get_product_price_range(
        &self,
        min_price: i64,
        max_price: i64,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_order_statistics_by_status(
        &self,
    ) -> impl Future<Output = Result<BTreeMap<String, OrderStatusSummary>, CoreError>> + Send;

    fn get_order_products(
        &self,
        product_id: i64,
        page: PageRequest,
    ) -> impl Future<Output = Result<OrderProduct, CoreError>> + Send;

    fn get_product_order_count(
        &self,
        product_id: i64,
    ) -> impl Future<Output = Result<Option<ProductOrderCount>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn create(&self, product: NewProduct)
    -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn find_by_id(
        &self,
        product_id: i64,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn find_by_min_price(
        &self,
        min_price: Option<i64>,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn find_by_price_range(
        &self,
        min_price: i64,
        max_price: i64,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn delete_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    fn create(&self, order: NewOrder) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn create_many(
        &self,
        orders: Vec<NewOrder>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn summarize_product(
        &self,
        product_id: i64,
        status: Option<String>,
    ) -> impl Future<Output = Result<Option<OrderSummary>, CoreError>> + Send;

    fn summarize_by_status(
        &self,
    ) -> impl Future<Output = Result<BTreeMap<String, OrderStatusSummary>, CoreError>> + Send;

    fn find_by_product(
        &self,
        product_id: i64,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Order>, CoreError>> + Send;

    fn count_for_product(
        &self,
        product_id: i64,
    ) -> impl Future<Output = Result<Option<ProductOrderCount>, CoreError>> + Send;

    fn delete_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
