use axum::extract::State;
use quarry_core::domain::member::{
    ports::MemberService,
    value_objects::{MemberSearchCondition, MemberTeamDto},
};

use crate::application::http::{
    member::validators::MemberSearchQuery,
    query_params::member_sort,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "member",
    summary = "Search members",
    description = "Every filter is optional. Present filters are combined with AND.",
    params(MemberSearchQuery),
    responses(
        (status = 200, body = [MemberTeamDto]),
        (status = 400, description = "Unknown sort field")
    ),
)]
pub async fn search_members(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<MemberSearchQuery>,
) -> Result<Response<Vec<MemberTeamDto>>, ApiError> {
    let sort = member_sort(query.sort.as_deref())?;

    let members = state
        .service
        .search_members(MemberSearchCondition::from(&query), sort)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(members))
}
