use axum::extract::State;
use quarry_core::domain::member::ports::MemberService;

use crate::application::http::{
    member::validators::{BulkUpdateResponse, IncrementAgesValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    patch,
    path = "/bulk/age",
    tag = "member",
    summary = "Add a delta to every member's age",
    request_body = IncrementAgesValidator,
    responses(
        (status = 200, body = BulkUpdateResponse)
    ),
)]
pub async fn increment_ages(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<IncrementAgesValidator>,
) -> Result<Response<BulkUpdateResponse>, ApiError> {
    let affected = state
        .service
        .increment_member_ages(payload.delta)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkUpdateResponse { affected }))
}
