use axum::extract::State;
use quarry_core::domain::catalog::{
    entities::Order, ports::CatalogService, value_objects::CreateOrderInput,
};

use crate::application::http::{
    order::validators::CreateOrderValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "order",
    summary = "Create order",
    request_body = CreateOrderValidator,
    responses(
        (status = 201, body = Order),
        (status = 400, description = "Invalid order or unknown product")
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateOrderValidator>,
) -> Result<Response<Order>, ApiError> {
    let order = state
        .service
        .create_order(CreateOrderInput {
            product_id: payload.product_id,
            quantity: payload.quantity,
            total_price: payload.total_price,
            status: payload.status,
            order_date: payload.order_date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(order))
}
