use axum::extract::{Path, State};
use quarry_core::domain::member::{entities::Member, ports::MemberService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{member_id}",
    tag = "member",
    summary = "Get member",
    params(
        ("member_id" = i64, Path, description = "Member ID"),
    ),
    responses(
        (status = 200, body = Member),
        (status = 404, description = "Member not found")
    ),
)]
pub async fn get_member(
    Path(member_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Member>, ApiError> {
    let member = state
        .service
        .get_member(member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(member))
}
