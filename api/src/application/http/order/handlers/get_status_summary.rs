use std::collections::BTreeMap;

use axum::extract::State;
use quarry_core::domain::catalog::{ports::CatalogService, value_objects::OrderStatusSummary};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/status-summary",
    tag = "order",
    summary = "Summarize orders by status",
    description = "Order count and total amount per status present in the orders, keyed by status.",
    responses(
        (status = 200, body = BTreeMap<String, OrderStatusSummary>)
    ),
)]
pub async fn get_status_summary(
    State(state): State<AppState>,
) -> Result<Response<BTreeMap<String, OrderStatusSummary>>, ApiError> {
    let summary = state
        .service
        .get_order_statistics_by_status()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
