use axum::extract::State;
use quarry_core::domain::member::ports::MemberService;

use crate::application::http::{
    member::validators::{BulkUpdateResponse, DeleteMembersQuery},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateQuery},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/bulk",
    tag = "member",
    summary = "Delete members up to an age",
    params(DeleteMembersQuery),
    responses(
        (status = 200, body = BulkUpdateResponse)
    ),
)]
pub async fn delete_members(
    State(state): State<AppState>,
    ValidateQuery(query): ValidateQuery<DeleteMembersQuery>,
) -> Result<Response<BulkUpdateResponse>, ApiError> {
    let affected = state
        .service
        .delete_members_up_to_age(query.age_loe)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(BulkUpdateResponse { affected }))
}
