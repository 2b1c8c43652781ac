use tracing::instrument;

use crate::domain::{
    catalog::ports::{OrderRepository, ProductRepository},
    common::{entities::app_errors::CoreError, has_text, services::Service},
    health::ports::HealthCheckRepository,
    member::{entities::Member, ports::MemberRepository, value_objects::TeamAgeStats},
    team::{
        entities::Team,
        ports::{TeamRepository, TeamService},
        value_objects::CreateTeamInput,
    },
};

impl<M, T, P, O, HC> TeamService for Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_team(&self, input: CreateTeamInput) -> Result<Team, CoreError> {
        if !has_text(&input.name) {
            return Err(CoreError::InvalidInput("team name must not be blank".to_string()));
        }

        self.team_repository.create(input.name).await
    }

    #[instrument(skip(self))]
    async fn get_teams(&self) -> Result<Vec<Team>, CoreError> {
        self.team_repository.find_all().await
    }

    #[instrument(skip(self))]
    async fn get_team_members(&self, team_id: i64) -> Result<Vec<Member>, CoreError> {
        let team = self
            .team_repository
            .find_by_id(team_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        self.member_repository.find_by_team(team.id).await
    }

    #[instrument(skip(self))]
    async fn get_team_age_stats(
        &self,
        exclude_team: Option<String>,
    ) -> Result<Vec<TeamAgeStats>, CoreError> {
        let exclude_team = exclude_team.filter(|name| has_text(name));
        self.member_repository.team_age_stats(exclude_team).await
    }
}
