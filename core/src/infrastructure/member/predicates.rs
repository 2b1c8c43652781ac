//! Member search predicates. Each one returns `None` for an absent filter.

use sea_orm::{ColumnTrait, Condition, sea_query::SimpleExpr};

use crate::{
    domain::{common::has_text, member::value_objects::MemberSearchCondition},
    entity::{members, teams},
    infrastructure::predicates::all_of,
};

pub fn username_eq(username: Option<&str>) -> Option<SimpleExpr> {
    username
        .filter(|username| has_text(username))
        .map(|username| members::Column::Username.eq(username))
}

/// Matches on the joined team. The query must join `teams`.
pub fn team_name_eq(team_name: Option<&str>) -> Option<SimpleExpr> {
    team_name
        .filter(|team_name| has_text(team_name))
        .map(|team_name| teams::Column::Name.eq(team_name))
}

pub fn age_goe(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.gte(age))
}

pub fn age_loe(age: Option<i32>) -> Option<SimpleExpr> {
    age.map(|age| members::Column::Age.lte(age))
}

pub fn age_lt(age: i32) -> SimpleExpr {
    members::Column::Age.lt(age)
}

pub fn age_between(goe: Option<i32>, loe: Option<i32>) -> Option<SimpleExpr> {
    match (age_goe(goe), age_loe(loe)) {
        (Some(lower), Some(upper)) => Some(lower.and(upper)),
        (lower, upper) => lower.or(upper),
    }
}

pub fn member_search(condition: &MemberSearchCondition) -> Option<Condition> {
    all_of([
        username_eq(condition.username.as_deref()),
        team_name_eq(condition.team_name.as_deref()),
        age_between(condition.age_goe, condition.age_loe),
    ])
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, QueryTrait, sea_query::PostgresQueryBuilder};

    use super::*;
    use crate::infrastructure::predicates::filter_all;

    fn render(condition: Option<Condition>) -> String {
        filter_all(members::Entity::find(), condition)
            .into_query()
            .to_string(PostgresQueryBuilder)
    }

    #[test]
    fn test_blank_text_is_absent() {
        assert!(username_eq(None).is_none());
        assert!(username_eq(Some("")).is_none());
        assert!(username_eq(Some("  ")).is_none());
        assert!(team_name_eq(Some("\t")).is_none());
        assert!(username_eq(Some("baz")).is_some());
    }

    #[test]
    fn test_age_between_is_null_guarded() {
        assert!(age_between(None, None).is_none());

        let sql = render(all_of([age_between(Some(35), None)]));
        assert!(sql.contains(r#""members"."age" >= 35"#), "{sql}");
        assert!(!sql.contains("<="), "{sql}");

        let sql = render(all_of([age_between(None, Some(40))]));
        assert!(sql.contains(r#""members"."age" <= 40"#), "{sql}");
        assert!(!sql.contains(">="), "{sql}");
    }

    #[test]
    fn test_age_between_is_inclusive_on_both_ends() {
        let sql = render(all_of([age_between(Some(35), Some(40))]));
        assert!(
            sql.contains(r#""members"."age" >= 35 AND "members"."age" <= 40"#),
            "{sql}"
        );
    }

    #[test]
    fn test_empty_search_has_no_where_clause() {
        let sql = render(member_search(&MemberSearchCondition::default()));
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn test_full_search_condition() {
        let condition = MemberSearchCondition {
            username: Some("baz".to_string()),
            team_name: Some("foo".to_string()),
            age_goe: Some(20),
            age_loe: None,
        };

        let sql = render(member_search(&condition));
        assert!(sql.contains(r#""members"."username" = 'baz'"#), "{sql}");
        assert!(sql.contains(r#""teams"."name" = 'foo'"#), "{sql}");
        assert!(sql.contains(r#""members"."age" >= 20"#), "{sql}");
    }
}
