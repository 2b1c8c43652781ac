use axum::extract::State;
use quarry_core::domain::member::{ports::MemberService, value_objects::MemberAgeStats};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/stats",
    tag = "member",
    summary = "Get member age statistics",
    responses(
        (status = 200, body = MemberAgeStats)
    ),
)]
pub async fn get_member_stats(
    State(state): State<AppState>,
) -> Result<Response<MemberAgeStats>, ApiError> {
    let stats = state
        .service
        .get_member_age_stats()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
