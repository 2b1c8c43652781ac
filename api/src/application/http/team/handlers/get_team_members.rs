use axum::extract::{Path, State};
use quarry_core::domain::{member::entities::Member, team::ports::TeamService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{team_id}/members",
    tag = "team",
    summary = "Get members of a team",
    params(
        ("team_id" = i64, Path, description = "Team ID"),
    ),
    responses(
        (status = 200, body = [Member]),
        (status = 404, description = "Team not found")
    ),
)]
pub async fn get_team_members(
    Path(team_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Member>>, ApiError> {
    let members = state
        .service
        .get_team_members(team_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(members))
}
