use axum::extract::State;
use quarry_core::domain::catalog::{entities::Product, ports::CatalogService};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::application::http::{
    query_params::page_request,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetProductsQuery {
    /// Inclusive lower bound on the price. Absent means no bound.
    pub min_price: Option<i64>,
    /// 1-based page number.
    pub page: Option<u64>,
    pub size: Option<u64>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "Get products",
    description = "Pages through products, optionally priced at or above `min_price`.",
    params(GetProductsQuery),
    responses(
        (status = 200, body = [Product]),
        (status = 400, description = "Invalid pagination")
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<GetProductsQuery>,
) -> Result<Response<Vec<Product>>, ApiError> {
    let page = page_request(query.page, query.size)?;

    let products = state
        .service
        .get_products(query.min_price, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(products))
}
