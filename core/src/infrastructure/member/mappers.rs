use sea_orm::FromQueryResult;

use crate::domain::member::{
    entities::Member,
    value_objects::{MemberAgeStats, MemberTeamDto, TeamAgeStats},
};
use crate::entity::members::Model as MemberModel;

impl From<&MemberModel> for Member {
    fn from(model: &MemberModel) -> Self {
        Member {
            id: model.id,
            username: model.username.clone(),
            age: model.age,
            team_id: model.team_id,
        }
    }
}

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member::from(&model)
    }
}

#[derive(Debug, FromQueryResult)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl From<MemberTeamRow> for MemberTeamDto {
    fn from(row: MemberTeamRow) -> Self {
        MemberTeamDto {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct MemberAgeStatsRow {
    pub count: i64,
    pub sum: Option<i64>,
    pub avg: Option<f64>,
    pub max: Option<i32>,
    pub min: Option<i32>,
}

impl From<MemberAgeStatsRow> for MemberAgeStats {
    fn from(row: MemberAgeStatsRow) -> Self {
        MemberAgeStats {
            count: row.count,
            sum: row.sum,
            avg: row.avg,
            max: row.max,
            min: row.min,
        }
    }
}

#[derive(Debug, FromQueryResult)]
pub struct TeamAgeStatsRow {
    pub team_id: i64,
    pub team_name: String,
    pub average_age: f64,
}

impl From<TeamAgeStatsRow> for TeamAgeStats {
    fn from(row: TeamAgeStatsRow) -> Self {
        TeamAgeStats {
            team_id: row.team_id,
            team_name: row.team_name,
            average_age: row.average_age,
        }
    }
}
