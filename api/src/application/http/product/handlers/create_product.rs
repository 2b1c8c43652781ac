use axum::extract::State;
use quarry_core::domain::catalog::{
    entities::Product, ports::CatalogService, value_objects::CreateProductInput,
};

use crate::application::http::{
    product::validators::CreateProductValidator,
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
    tag = "product",
    summary = "Create product",
    request_body = CreateProductValidator,
    responses(
        (status = 201, body = Product),
        (status = 400, description = "Invalid product")
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .create_product(CreateProductInput {
            name: payload.name,
            price: payload.price,
            category: payload.category,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(product))
}
