use axum::extract::{Path, Query, State};
use quarry_core::domain::catalog::{ports::CatalogService, value_objects::OrderSummary};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetOrderSummaryQuery {
    /// Only orders in this status. Absent means every status.
    pub status: Option<String>,
}

#[utoipa::path(
    get,
    path = "/{product_id}/summary",
    tag = "order",
    summary = "Summarize orders of a product",
    description = "Sums quantity and total price of the product's orders. Null when no order matches.",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
        GetOrderSummaryQuery
    ),
    responses(
        (status = 200, body = OrderSummary, description = "Order summary, or null")
    ),
)]
pub async fn get_order_summary(
    Path(product_id): Path<i64>,
    Query(query): Query<GetOrderSummaryQuery>,
    State(state): State<AppState>,
) -> Result<Response<Option<OrderSummary>>, ApiError> {
    let summary = state
        .service
        .get_order_summary(product_id, query.status)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
