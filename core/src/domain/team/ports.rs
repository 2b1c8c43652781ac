use crate::domain::{
    common::entities::app_errors::CoreError,
    member::{entities::Member, value_objects::TeamAgeStats},
    team::{entities::Team, value_objects::CreateTeamInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait TeamService: Send + Sync {
    fn create_team(
        &self,
        input: CreateTeamInput,
    ) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn get_teams(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    /// Members of a team. Teams hold no member collection, this is a query on members.
    fn get_team_members(
        &self,
        team_id: i64,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn get_team_age_stats(
        &self,
        exclude_team: Option<String>,
    ) -> impl Future<Output = Result<Vec<TeamAgeStats>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait TeamRepository: Send + Sync {
    fn create(&self, name: String) -> impl Future<Output = Result<Team, CoreError>> + Send;

    fn find_by_id(
        &self,
        team_id: i64,
    ) -> impl Future<Output = Result<Option<Team>, CoreError>> + Send;

    fn find_all(&self) -> impl Future<Output = Result<Vec<Team>, CoreError>> + Send;

    fn delete_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
