mod common;

use common::ApiContext;
use quarry_api::application::http::health::handlers::health_live::LivenessResponse;
use quarry_core::domain::health::entities::DatabaseHealthStatus;
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_liveness(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<LivenessResponse>(),
        LivenessResponse {
            status: "UP".to_string()
        }
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_readiness_pings_database(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health/ready").await;

    response.assert_status_ok();
    assert_eq!(response.json::<DatabaseHealthStatus>().status, "UP");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_openapi_docs_are_served(ctx: &mut ApiContext) {
    ctx.server.get("/scalar").await.assert_status_ok();
    ctx.server.get("/redoc").await.assert_status_ok();
}
