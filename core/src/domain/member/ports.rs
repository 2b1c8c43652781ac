use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        pagination::{CountStrategy, Page, PageRequest},
    },
    member::{
        entities::{Member, NewMember},
        value_objects::{
            CreateMemberInput, MemberAgeStats, MemberSearchCondition, MemberSort, MemberTeamDto,
            RenameMembersInput, TeamAgeStats,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MemberService: Send + Sync {
    fn create_member(
        &self,
        input: CreateMemberInput,
    ) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn get_member(&self, member_id: i64) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn search_members(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    fn search_members_page(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
        page: PageRequest,
        strategy: CountStrategy,
    ) -> impl Future<Output = Result<Page<MemberTeamDto>, CoreError>> + Send;

    fn get_member_age_stats(&self)
    -> impl Future<Output = Result<MemberAgeStats, CoreError>> + Send;

    fn rename_members_younger_than(
        &self,
        input: RenameMembersInput,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn increment_member_ages(
        &self,
        delta: i32,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete_members_up_to_age(
        &self,
        age_loe: i32,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MemberRepository: Send + Sync {
    fn create(&self, member: NewMember) -> impl Future<Output = Result<Member, CoreError>> + Send;

    fn create_many(
        &self,
        members: Vec<NewMember>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_by_id(
        &self,
        member_id: i64,
    ) -> impl Future<Output = Result<Option<Member>, CoreError>> + Send;

    fn find_by_team(
        &self,
        team_id: i64,
    ) -> impl Future<Output = Result<Vec<Member>, CoreError>> + Send;

    fn search(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
    ) -> impl Future<Output = Result<Vec<MemberTeamDto>, CoreError>> + Send;

    fn search_page(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
        page: PageRequest,
        strategy: CountStrategy,
    ) -> impl Future<Output = Result<Page<MemberTeamDto>, CoreError>> + Send;

    fn age_stats(&self) -> impl Future<Output = Result<MemberAgeStats, CoreError>> + Send;

    fn team_age_stats(
        &self,
        exclude_team: Option<String>,
    ) -> impl Future<Output = Result<Vec<TeamAgeStats>, CoreError>> + Send;

    fn rename_younger_than(
        &self,
        age: i32,
        username: String,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn add_to_age(&self, delta: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete_up_to_age(&self, age: i32) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn delete_all(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
