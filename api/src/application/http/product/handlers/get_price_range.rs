use axum::extract::State;
use quarry_core::domain::catalog::{entities::Product, ports::CatalogService};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateQuery},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetPriceRangeQuery {
    pub min_price: i64,
    pub max_price: i64,
}

#[utoipa::path(
    get,
    path = "/price-range",
    tag = "product",
    summary = "Get products in a price range",
    description = "Products priced between `min_price` and `max_price`, both inclusive.",
    params(GetPriceRangeQuery),
    responses(
        (status = 200, body = [Product]),
        (status = 400, description = "Missing bound or min_price greater than max_price")
    ),
)]
pub async fn get_price_range(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<GetPriceRangeQuery>,
) -> Result<Response<Vec<Product>>, ApiError> {
    let products = state
        .service
        .get_product_price_range(query.min_price, query.max_price)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(products))
}
