use axum::extract::State;
use quarry_core::domain::catalog::{ports::CatalogService, value_objects::OrderProduct};
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
pub struct GetOrderProductsQuery {
    #[serde(alias = "productId")]
    pub product_id: i64,
    /// 1-based page number.
    pub page: Option<u64>,
    pub size: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "order",
    summary = "Get orders of a product",
    description = "One page of the product's orders. `productId` is accepted as an alias of `product_id`.",
    params(GetOrderProductsQuery),
    responses(
        (status = 200, body = OrderProduct),
        (status = 400, description = "Missing product or invalid pagination")
    ),
)]
pub async fn get_order_products(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<GetOrderProductsQuery>,
) -> Result<Response<OrderProduct>, ApiError> {
    let page = page_request(query.page, query.size)?;

    let orders = state
        .service
        .get_order_products(query.product_id, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(orders))
}
