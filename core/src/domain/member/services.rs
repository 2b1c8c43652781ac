use tracing::instrument;

use crate::domain::{
    catalog::ports::{OrderRepository, ProductRepository},
    common::{
        entities::app_errors::CoreError,
        has_text,
        pagination::{CountStrategy, Page, PageRequest},
        services::Service,
    },
    health::ports::HealthCheckRepository,
    member::{
        entities::{Member, NewMember},
        ports::{MemberRepository, MemberService},
        value_objects::{
            CreateMemberInput, MemberAgeStats, MemberSearchCondition, MemberSort, MemberTeamDto,
            RenameMembersInput,
        },
    },
    team::ports::TeamRepository,
};

impl<M, T, P, O, HC> MemberService for Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(age = input.age, team_id = ?input.team_id))]
    async fn create_member(&self, input: CreateMemberInput) -> Result<Member, CoreError> {
        if input.age < 0 {
            return Err(CoreError::InvalidInput("age must not be negative".to_string()));
        }

        if let Some(team_id) = input.team_id {
            self.team_repository
                .find_by_id(team_id)
                .await?
                .ok_or_else(|| CoreError::InvalidInput(format!("team {team_id} does not exist")))?;
        }

        self.member_repository
            .create(NewMember {
                username: input.username,
                age: input.age,
                team_id: input.team_id,
            })
            .await
    }

    #[instrument(skip(self))]
    async fn get_member(&self, member_id: i64) -> Result<Member, CoreError> {
        self.member_repository
            .find_by_id(member_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn search_members(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        self.member_repository.search(condition, sort).await
    }

    #[instrument(skip(self))]
    async fn search_members_page(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
        page: PageRequest,
        strategy: CountStrategy,
    ) -> Result<Page<MemberTeamDto>, CoreError> {
        self.member_repository
            .search_page(condition, sort, page, strategy)
            .await
    }

    #[instrument(skip(self))]
    async fn get_member_age_stats(&self) -> Result<MemberAgeStats, CoreError> {
        self.member_repository.age_stats().await
    }

    #[instrument(skip(self, input), fields(age_lt = input.age_lt))]
    async fn rename_members_younger_than(
        &self,
        input: RenameMembersInput,
    ) -> Result<u64, CoreError> {
        if !has_text(&input.username) {
            return Err(CoreError::InvalidInput("username must not be blank".to_string()));
        }

        self.member_repository
            .rename_younger_than(input.age_lt, input.username)
            .await
    }

    #[instrument(skip(self))]
    async fn increment_member_ages(&self, delta: i32) -> Result<u64, CoreError> {
        self.member_repository.add_to_age(delta).await
    }

    #[instrument(skip(self))]
    async fn delete_members_up_to_age(&self, age_loe: i32) -> Result<u64, CoreError> {
        self.member_repository.delete_up_to_age(age_loe).await
    }
}
