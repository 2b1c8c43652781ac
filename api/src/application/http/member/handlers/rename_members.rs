use axum::extract::State;
use quarry_core::domain::member::{ports::MemberService, value_objects::RenameMembersInput};

use crate::application::http::{
    member::validators::{BulkUpdateResponse, RenameMembersValidator},
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
    path = "/bulk/username",
    tag = "member",
    summary = "Rename members younger than an age",
    request_body = RenameMembersValidator,
    responses(
        (status = 200, body = BulkUpdateResponse)
    ),
)]
pub async fn rename_members(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RenameMembersValidator>,
) -> Result<Response<BulkUpdateResponse>, ApiError> {
    let affected = state
        .service
        .rename_members_younger_than(RenameMembersInput {
            age_lt: payload.age_lt,
            username: payload.username,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkUpdateResponse { affected }))
}
