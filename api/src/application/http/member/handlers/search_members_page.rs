use axum::extract::State;
use quarry_core::domain::{
    common::pagination::Page,
    member::{
        ports::MemberService,
        value_objects::{MemberSearchCondition, MemberTeamDto},
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    member::validators::MemberPageQuery,
    query_params::{member_sort, page_request},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MemberPageResponse {
    pub items: Vec<MemberTeamDto>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl From<Page<MemberTeamDto>> for MemberPageResponse {
    fn from(page: Page<MemberTeamDto>) -> Self {
        let total_pages = page.total_pages();

        MemberPageResponse {
            items: page.items,
            page: page.page,
            size: page.size,
            total: page.total,
            total_pages,
        }
    }
}

#[utoipa::path(
    get,
    path = "/page",
    tag = "member",
    summary = "Search members by page",
    description = "Same filters as the unpaged search. `count=separate` skips the team join in the count query unless a team name is given.",
    params(MemberPageQuery),
    responses(
        (status = 200, body = MemberPageResponse),
        (status = 400, description = "Invalid pagination or sort")
    ),
)]
pub async fn search_members_page(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<MemberPageQuery>,
) -> Result<Response<MemberPageResponse>, ApiError> {
    let sort = member_sort(query.sort.as_deref())?;
    let page = page_request(query.page, query.size)?;

    let result = state
        .service
        .search_members_page(
            MemberSearchCondition::from(&query),
            sort,
            page,
            query.count.unwrap_or_default(),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MemberPageResponse::from(result)))
}
