use axum::extract::State;
use quarry_core::domain::team::{
    entities::Team, ports::TeamService, value_objects::CreateTeamInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    team::validators::CreateTeamValidator,
};

#[utoipa::path(
    post,
    path = "",
    tag = "team",
    summary = "Create team",
    request_body = CreateTeamValidator,
    responses(
        (status = 201, body = Team)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateTeamValidator>,
) -> Result<Response<Team>, ApiError> {
    let team = state
        .service
        .create_team(CreateTeamInput { name: payload.name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(team))
}
