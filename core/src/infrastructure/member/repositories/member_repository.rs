use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    sea_query::{Alias, Expr, Func, NullOrdering, SimpleExpr},
};
use tracing::error;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        pagination::{CountStrategy, Page, PageRequest, resolve_total},
    },
    member::{
        entities::{Member, NewMember},
        ports::MemberRepository,
        value_objects::{
            MemberAgeStats, MemberSearchCondition, MemberSort, MemberSortField, MemberTeamDto,
            SortDirection, TeamAgeStats,
        },
    },
};
use crate::entity::{members, teams};
use crate::infrastructure::{
    member::{
        mappers::{MemberAgeStatsRow, MemberTeamRow, TeamAgeStatsRow},
        predicates::{age_loe, age_lt, member_search},
    },
    predicates::filter_all,
};

#[derive(Debug, Clone)]
pub struct PostgresMemberRepository {
    pub db: DatabaseConnection,
}

impl PostgresMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn count_members(&self, condition: &MemberSearchCondition) -> Result<u64, CoreError> {
        count_query(condition).count(&self.db).await.map_err(|e| {
            error!("Failed to count members: {}", e);
            CoreError::InternalServerError
        })
    }
}

/// Member projection left-joined with its team, filtered by the condition.
pub(crate) fn search_query(condition: &MemberSearchCondition) -> Select<members::Entity> {
    let query = members::Entity::find()
        .select_only()
        .column_as(members::Column::Id, "member_id")
        .column(members::Column::Username)
        .column(members::Column::Age)
        .column(members::Column::TeamId)
        .column_as(teams::Column::Name, "team_name")
        .join(JoinType::LeftJoin, members::Relation::Team.def());

    filter_all(query, member_search(condition))
}

/// Count query of a search. Joins `teams` only when a team predicate needs it.
pub(crate) fn count_query(condition: &MemberSearchCondition) -> Select<members::Entity> {
    let mut query = members::Entity::find();
    if condition.requires_team_join() {
        query = query.join(JoinType::LeftJoin, members::Relation::Team.def());
    }

    filter_all(query, member_search(condition))
}

pub(crate) fn apply_sort(
    mut query: Select<members::Entity>,
    sort: &MemberSort,
) -> Select<members::Entity> {
    for spec in sort.specs() {
        let order = match spec.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let column: SimpleExpr = match spec.field {
            MemberSortField::Id => Expr::col((members::Entity, members::Column::Id)).into(),
            MemberSortField::Age => Expr::col((members::Entity, members::Column::Age)).into(),
            MemberSortField::Username => {
                Expr::col((members::Entity, members::Column::Username)).into()
            }
            MemberSortField::TeamName => Expr::col((teams::Entity, teams::Column::Name)).into(),
        };

        query = if spec.field.is_nullable() {
            query.order_by_with_nulls(column, order, NullOrdering::Last)
        } else {
            query.order_by(column, order)
        };
    }

    // ties, and the default order, fall back to the id
    if !sort
        .specs()
        .iter()
        .any(|spec| spec.field == MemberSortField::Id)
    {
        query = query.order_by_asc(members::Column::Id);
    }

    query
}

/// Single-row aggregate over every member's age.
pub(crate) fn age_stats_query() -> Select<members::Entity> {
    let age = || Expr::col((members::Entity, members::Column::Age));

    members::Entity::find()
        .select_only()
        .column_as(as_bigint(Func::count(age())), "count")
        .column_as(as_bigint(Func::sum(age())), "sum")
        .column_as(as_double(Func::avg(age())), "avg")
        .column_as(Expr::expr(Func::max(age())), "max")
        .column_as(Expr::expr(Func::min(age())), "min")
}

fn as_bigint(expr: impl Into<sea_orm::sea_query::SimpleExpr>) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(expr).cast_as(Alias::new("bigint"))
}

fn as_double(expr: impl Into<sea_orm::sea_query::SimpleExpr>) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(expr).cast_as(Alias::new("double precision"))
}

impl MemberRepository for PostgresMemberRepository {
    async fn create(&self, member: NewMember) -> Result<Member, CoreError> {
        let created = members::ActiveModel {
            username: Set(member.username),
            age: Set(member.age),
            team_id: Set(member.team_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create member: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Member::from(created))
    }

    async fn create_many(&self, new_members: Vec<NewMember>) -> Result<u64, CoreError> {
        if new_members.is_empty() {
            return Ok(0);
        }

        let models = new_members.into_iter().map(|member| members::ActiveModel {
            username: Set(member.username),
            age: Set(member.age),
            team_id: Set(member.team_id),
            ..Default::default()
        });

        members::Entity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create members: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, CoreError> {
        let member = members::Entity::find_by_id(member_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get member by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Member::from);

        Ok(member)
    }

    async fn find_by_team(&self, team_id: i64) -> Result<Vec<Member>, CoreError> {
        let members = members::Entity::find()
            .filter(members::Column::TeamId.eq(team_id))
            .order_by_asc(members::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch members by team: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Member::from)
            .collect::<Vec<Member>>();

        Ok(members)
    }

    async fn search(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
    ) -> Result<Vec<MemberTeamDto>, CoreError> {
        let rows = apply_sort(search_query(&condition), &sort)
            .into_model::<MemberTeamRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search members: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(MemberTeamDto::from).collect())
    }

    async fn search_page(
        &self,
        condition: MemberSearchCondition,
        sort: MemberSort,
        page: PageRequest,
        strategy: CountStrategy,
    ) -> Result<Page<MemberTeamDto>, CoreError> {
        let content = apply_sort(search_query(&condition), &sort);

        let rows = content
            .clone()
            .offset(page.offset())
            .limit(page.size())
            .into_model::<MemberTeamRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch member page: {}", e);
                CoreError::InternalServerError
            })?;

        let total = match strategy {
            CountStrategy::Combined => content.count(&self.db).await.map_err(|e| {
                error!("Failed to count member page: {}", e);
                CoreError::InternalServerError
            })?,
            CountStrategy::Separate => match resolve_total(page, rows.len()) {
                Some(total) => total,
                None => self.count_members(&condition).await?,
            },
        };

        let items = rows.into_iter().map(MemberTeamDto::from).collect();

        Ok(Page::new(items, page, total))
    }

    async fn age_stats(&self) -> Result<MemberAgeStats, CoreError> {
        let row = age_stats_query()
            .into_model::<MemberAgeStatsRow>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to compute member age stats: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(row.map(MemberAgeStats::from).unwrap_or(MemberAgeStats {
            count: 0,
            sum: None,
            avg: None,
            max: None,
            min: None,
        }))
    }

    async fn team_age_stats(
        &self,
        exclude_team: Option<String>,
    ) -> Result<Vec<TeamAgeStats>, CoreError> {
        let mut query = members::Entity::find()
            .select_only()
            .column_as(teams::Column::Id, "team_id")
            .column_as(teams::Column::Name, "team_name")
            .column_as(
                as_double(Func::avg(Expr::col((members::Entity, members::Column::Age)))),
                "average_age",
            )
            .join(JoinType::InnerJoin, members::Relation::Team.def())
            .group_by(teams::Column::Id)
            .group_by(teams::Column::Name);

        if let Some(exclude_team) = exclude_team {
            query = query.having(teams::Column::Name.ne(exclude_team));
        }

        let rows = query
            .order_by_asc(teams::Column::Id)
            .into_model::<TeamAgeStatsRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to compute team age stats: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(TeamAgeStats::from).collect())
    }

    async fn rename_younger_than(&self, age: i32, username: String) -> Result<u64, CoreError> {
        let result = members::Entity::update_many()
            .col_expr(members::Column::Username, Expr::value(username))
            .filter(age_lt(age))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to rename members: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn add_to_age(&self, delta: i32) -> Result<u64, CoreError> {
        let result = members::Entity::update_many()
            .col_expr(
                members::Column::Age,
                Expr::col(members::Column::Age).add(delta),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to shift member ages: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }

    async fn delete_up_to_age(&self, age: i32) -> Result<u64, CoreError> {
        let mut query = members::Entity::delete_many();
        if let Some(predicate) = age_loe(Some(age)) {
            query = query.filter(predicate);
        }

        let result = query.exec(&self.db).await.map_err(|e| {
            error!("Failed to delete members: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(result.rows_affected)
    }

    async fn delete_all(&self) -> Result<u64, CoreError> {
        let result = members::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete all members: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{QueryTrait, sea_query::PostgresQueryBuilder};

    use super::*;

    fn render(query: Select<members::Entity>) -> String {
        query.into_query().to_string(PostgresQueryBuilder)
    }

    #[test]
    fn test_search_query_left_joins_team() {
        let sql = render(search_query(&MemberSearchCondition::default()));
        assert!(
            sql.contains(r#"LEFT JOIN "teams" ON "members"."team_id" = "teams"."id""#),
            "{sql}"
        );
        assert!(sql.contains(r#""teams"."name" AS "team_name""#), "{sql}");
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn test_count_query_skips_join_without_team_filter() {
        let condition = MemberSearchCondition {
            age_goe: Some(10),
            ..Default::default()
        };
        let sql = render(count_query(&condition));
        assert!(!sql.contains("JOIN"), "{sql}");

        let condition = MemberSearchCondition {
            team_name: Some("foo".to_string()),
            ..Default::default()
        };
        let sql = render(count_query(&condition));
        assert!(sql.contains("LEFT JOIN"), "{sql}");
    }

    #[test]
    fn test_default_sort_is_id_ascending() {
        let sql = render(apply_sort(
            search_query(&MemberSearchCondition::default()),
            &MemberSort::default(),
        ));
        assert!(sql.ends_with(r#"ORDER BY "members"."id" ASC"#), "{sql}");
    }

    #[test]
    fn test_nullable_sort_keys_put_nulls_last() {
        let sort = MemberSort::by(MemberSortField::Age, SortDirection::Desc)
            .then(MemberSortField::Username, SortDirection::Asc);
        let sql = render(apply_sort(
            search_query(&MemberSearchCondition::default()),
            &sort,
        ));
        assert!(
            sql.contains(
                r#"ORDER BY "members"."age" DESC, "members"."username" ASC NULLS LAST, "members"."id" ASC"#
            ),
            "{sql}"
        );
    }

    #[test]
    fn test_team_name_sorts_nulls_last_when_descending() {
        let sort = MemberSort::by(MemberSortField::TeamName, SortDirection::Desc);
        let sql = render(apply_sort(
            search_query(&MemberSearchCondition::default()),
            &sort,
        ));
        assert!(
            sql.contains(r#"ORDER BY "teams"."name" DESC NULLS LAST, "members"."id" ASC"#),
            "{sql}"
        );
    }

    #[test]
    fn test_age_stats_selects_every_aggregate() {
        let sql = render(age_stats_query());
        assert!(sql.contains(r#"MAX("members"."age") AS "max""#), "{sql}");
        assert!(sql.contains(r#"MIN("members"."age") AS "min""#), "{sql}");
        assert!(sql.contains(r#"AS "count""#), "{sql}");
        assert!(sql.contains(r#"AS "avg""#), "{sql}");
    }
}
