use crate::application::http::{
    health::router::HealthApiDoc, member::router::MemberApiDoc, order::router::OrderApiDoc,
    product::router::ProductApiDoc, team::router::TeamApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quarry API"
    ),
    nest(
        (path = "/api/products", api = ProductApiDoc),
        (path = "/api/orders", api = OrderApiDoc),
        (path = "/api/teams", api = TeamApiDoc),
        (path = "/api/members", api = MemberApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
