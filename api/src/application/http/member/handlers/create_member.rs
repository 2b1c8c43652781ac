use axum::extract::State;
use quarry_core::domain::member::{
    entities::Member, ports::MemberService, value_objects::CreateMemberInput,
};

use crate::application::http::{
    member::validators::CreateMemberValidator,
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
    tag = "member",
    summary = "Create member",
    request_body = CreateMemberValidator,
    responses(
        (status = 201, body = Member),
        (status = 400, description = "Invalid age or unknown team")
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateMemberValidator>,
) -> Result<Response<Member>, ApiError> {
    let member = state
        .service
        .create_member(CreateMemberInput {
            username: payload.username,
            age: payload.age,
            team_id: payload.team_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(member))
}
