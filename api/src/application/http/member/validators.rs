use quarry_core::domain::{
    common::pagination::CountStrategy, member::value_objects::MemberSearchCondition,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "username must not be empty"))]
    pub username: Option<String>,

    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,

    #[serde(default, alias = "teamId")]
    pub team_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenameMembersValidator {
    /// Members strictly younger than this are renamed.
    pub age_lt: i32,

    #[validate(length(min = 1, max = 255, message = "username is required"))]
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct IncrementAgesValidator {
    pub delta: i32,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberSearchQuery {
    pub username: Option<String>,

    #[serde(alias = "teamName")]
    pub team_name: Option<String>,

    /// Inclusive lower age bound.
    #[serde(alias = "ageGoe")]
    #[validate(range(min = 0))]
    pub age_goe: Option<i32>,

    /// Inclusive upper age bound.
    #[serde(alias = "ageLoe")]
    #[validate(range(min = 0))]
    pub age_loe: Option<i32>,

    /// Comma separated fields among `id`, `username`, `age`, `team_name`. A leading `-` sorts descending.
    pub sort: Option<String>,
}

impl From<&MemberSearchQuery> for MemberSearchCondition {
    fn from(query: &MemberSearchQuery) -> Self {
        MemberSearchCondition {
            username: query.username.clone(),
            team_name: query.team_name.clone(),
            age_goe: query.age_goe,
            age_loe: query.age_loe,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberPageQuery {
    pub username: Option<String>,

    #[serde(alias = "teamName")]
    pub team_name: Option<String>,

    #[serde(alias = "ageGoe")]
    #[validate(range(min = 0))]
    pub age_goe: Option<i32>,

    #[serde(alias = "ageLoe")]
    #[validate(range(min = 0))]
    pub age_loe: Option<i32>,

    pub sort: Option<String>,

    /// 1-based page number.
    pub page: Option<u64>,

    pub size: Option<u64>,

    /// How the total is counted. Defaults to `separate`.
    pub count: Option<CountStrategy>,
}

impl From<&MemberPageQuery> for MemberSearchCondition {
    fn from(query: &MemberPageQuery) -> Self {
        MemberSearchCondition {
            username: query.username.clone(),
            team_name: query.team_name.clone(),
            age_goe: query.age_goe,
            age_loe: query.age_loe,
        }
    }
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteMembersQuery {
    /// Members aged at most this are deleted.
    pub age_loe: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BulkUpdateResponse {
    pub affected: u64,
}
