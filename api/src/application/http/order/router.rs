use super::handlers::create_order::{__path_create_order, create_order};
use super::handlers::get_order_products::{__path_get_order_products, get_order_products};
use super::handlers::get_order_summary::{__path_get_order_summary, get_order_summary};
use super::handlers::get_status_summary::{__path_get_status_summary, get_status_summary};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_order, get_order_summary, get_status_summary, get_order_products))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/orders", state.args.server.root_path),
            post(create_order),
        )
        .route(
            &format!("{}/api/orders/status-summary", state.args.server.root_path),
            get(get_status_summary),
        )
        .route(
            &format!("{}/api/orders/products", state.args.server.root_path),
            get(get_order_products),
        )
        .route(
            &format!(
                "{}/api/orders/{{product_id}}/summary",
                state.args.server.root_path
            ),
            get(get_order_summary),
        )
}
