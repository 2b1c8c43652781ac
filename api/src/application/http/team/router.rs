use super::handlers::create_team::{__path_create_team, create_team};
use super::handlers::get_team_age_stats::{__path_get_team_age_stats, get_team_age_stats};
use super::handlers::get_team_members::{__path_get_team_members, get_team_members};
use super::handlers::get_teams::{__path_get_teams, get_teams};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_team, get_teams, get_team_members, get_team_age_stats))]
pub struct TeamApiDoc;

pub fn team_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/teams", state.args.server.root_path),
            get(get_teams).post(create_team),
        )
        .route(
            &format!("{}/api/teams/age-stats", state.args.server.root_path),
            get(get_team_age_stats),
        )
        .route(
            &format!("{}/api/teams/{{team_id}}/members", state.args.server.root_path),
            get(get_team_members),
        )
}
