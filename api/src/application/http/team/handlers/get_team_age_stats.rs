use axum::extract::{Query, State};
use quarry_core::domain::{member::value_objects::TeamAgeStats, team::ports::TeamService};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetTeamAgeStatsQuery {
    /// Name of a team to leave out of the result.
    pub exclude: Option<String>,
}

#[utoipa::path(
    get,
    path = "/age-stats",
    tag = "team",
    summary = "Average member age per team",
    description = "Teams without members do not appear.",
    params(GetTeamAgeStatsQuery),
    responses(
        (status = 200, body = [TeamAgeStats])
    ),
)]
pub async fn get_team_age_stats(
    State(state): State<AppState>,
    Query(query): Query<GetTeamAgeStatsQuery>,
) -> Result<Response<Vec<TeamAgeStats>>, ApiError> {
    let stats = state
        .service
        .get_team_age_stats(query.exclude)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
