use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{entities::app_errors::CoreError, has_text};

/// Optional filters of a member search. Every absent field leaves the result unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Whether a filter on the joined team is present.
    pub fn requires_team_join(&self) -> bool {
        self.team_name.as_deref().is_some_and(has_text)
    }
}

/// Projection of a member joined with its (optional) team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberTeamDto {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberAgeStats {
    pub count: i64,
    pub sum: Option<i64>,
    pub avg: Option<f64>,
    pub max: Option<i32>,
    pub min: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamAgeStats {
    pub team_id: i64,
    pub team_name: String,
    pub average_age: f64,
}

pub struct CreateMemberInput {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

pub struct RenameMembersInput {
    pub age_lt: i32,
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSortField {
    Id,
    Username,
    Age,
    TeamName,
}

impl MemberSortField {
    fn parse(field: &str) -> Result<Self, CoreError> {
        match field {
            "id" => Ok(Self::Id),
            "username" => Ok(Self::Username),
            "age" => Ok(Self::Age),
            "team_name" | "teamName" => Ok(Self::TeamName),
            other => Err(CoreError::InvalidSort(format!("unknown sort field '{other}'"))),
        }
    }

    /// Text keys may be null and always sort after every present value.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Username | Self::TeamName)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberSortSpec {
    pub field: MemberSortField,
    pub direction: SortDirection,
}

/// Ordered list of sort keys. Empty means the default `id ASC`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSort(pub Vec<MemberSortSpec>);

impl MemberSort {
    /// Parses `-age,username`: comma separated fields, a leading `-` for descending.
    pub fn parse(sort: &str) -> Result<Self, CoreError> {
        let mut specs = Vec::new();

        for part in sort.split(',') {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (direction, field) = match trimmed.strip_prefix('-') {
                Some(field) => (SortDirection::Desc, field),
                None => (
                    SortDirection::Asc,
                    trimmed.strip_prefix('+').unwrap_or(trimmed),
                ),
            };

            specs.push(MemberSortSpec {
                field: MemberSortField::parse(field)?,
                direction,
            });
        }

        Ok(Self(specs))
    }

    pub fn by(field: MemberSortField, direction: SortDirection) -> Self {
        Self(vec![MemberSortSpec { field, direction }])
    }

    pub fn then(mut self, field: MemberSortField, direction: SortDirection) -> Self {
        self.0.push(MemberSortSpec { field, direction });
        self
    }

    pub fn specs(&self) -> &[MemberSortSpec] {
        &self.0
    }
}
