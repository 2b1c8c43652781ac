use super::handlers::create_product::{__path_create_product, create_product};
use super::handlers::get_price_range::{__path_get_price_range, get_price_range};
use super::handlers::get_product_order_count::{
    __path_get_product_order_count, get_product_order_count,
};
use super::handlers::get_products::{__path_get_products, get_products};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_products, create_product, get_price_range, get_product_order_count))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/products", state.args.server.root_path),
            get(get_products).post(create_product),
        )
        .route(
            &format!("{}/api/products/price-range", state.args.server.root_path),
            get(get_price_range),
        )
        .route(
            &format!(
                "{}/api/products/{{product_id}}/order-count",
                state.args.server.root_path
            ),
            get(get_product_order_count),
        )
}
