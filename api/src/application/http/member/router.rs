use super::handlers::create_member::{__path_create_member, create_member};
use super::handlers::delete_members::{__path_delete_members, delete_members};
use super::handlers::get_member::{__path_get_member, get_member};
use super::handlers::get_member_stats::{__path_get_member_stats, get_member_stats};
use super::handlers::increment_ages::{__path_increment_ages, increment_ages};
use super::handlers::rename_members::{__path_rename_members, rename_members};
use super::handlers::search_members::{__path_search_members, search_members};
use super::handlers::search_members_page::{__path_search_members_page, search_members_page};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_member,
    get_member,
    search_members,
    search_members_page,
    get_member_stats,
    rename_members,
    increment_ages,
    delete_members
))]
pub struct MemberApiDoc;

pub fn member_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/api/members"),
            get(search_members).post(create_member),
        )
        .route(&format!("{root_path}/api/members/page"), get(search_members_page))
        .route(&format!("{root_path}/api/members/stats"), get(get_member_stats))
        .route(&format!("{root_path}/api/members/bulk"), delete(delete_members))
        .route(
            &format!("{root_path}/api/members/bulk/username"),
            patch(rename_members),
        )
        .route(
            &format!("{root_path}/api/members/bulk/age"),
            patch(increment_ages),
        )
        .route(
            &format!("{root_path}/api/members/{{member_id}}"),
            get(get_member),
        )
}
