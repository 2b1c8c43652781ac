use axum::extract::State;
use quarry_core::domain::team::{entities::Team, ports::TeamService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "team",
    summary = "Get teams",
    responses(
        (status = 200, body = [Team])
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<Response<Vec<Team>>, ApiError> {
    let teams = state.service.get_teams().await.map_err(ApiError::from)?;

    Ok(Response::OK(teams))
}
