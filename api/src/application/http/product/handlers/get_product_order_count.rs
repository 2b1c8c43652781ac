use axum::extract::{Path, State};
use quarry_core::domain::catalog::{ports::CatalogService, value_objects::ProductOrderCount};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{product_id}/order-count",
    tag = "product",
    summary = "Count orders of a product",
    description = "Returns null when the product has no orders.",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = ProductOrderCount, description = "Order count, or null")
    ),
)]
pub async fn get_product_order_count(
    Path(product_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Option<ProductOrderCount>>, ApiError> {
    let count = state
        .service
        .get_product_order_count(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(count))
}
