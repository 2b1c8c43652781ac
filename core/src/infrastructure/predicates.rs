//! Folding of optional predicates into a single conjunction.

use sea_orm::{Condition, QueryFilter, sea_query::SimpleExpr};

/// ANDs every present predicate. `None` when no predicate is present, so the
/// caller adds no WHERE clause at all.
pub fn all_of<I>(predicates: I) -> Option<Condition>
where
    I: IntoIterator<Item = Option<SimpleExpr>>,
{
    let mut present = predicates.into_iter().flatten().peekable();
    present.peek()?;

    Some(present.fold(Condition::all(), |condition, predicate| {
        condition.add(predicate)
    }))
}

pub fn filter_all<Q: QueryFilter>(query: Q, condition: Option<Condition>) -> Q {
    match condition {
        Some(condition) => query.filter(condition),
        None => query,
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{
        ColumnTrait, EntityTrait, QueryTrait, sea_query::PostgresQueryBuilder,
    };

    use super::*;
    use crate::entity::members;

    fn render(condition: Option<Condition>) -> String {
        filter_all(members::Entity::find(), condition)
            .into_query()
            .to_string(PostgresQueryBuilder)
    }

    #[test]
    fn test_no_predicate_yields_no_condition() {
        assert!(all_of([None, None]).is_none());
        assert!(!render(all_of(Vec::new())).contains("WHERE"));
    }

    #[test]
    fn test_absent_predicates_are_skipped() {
        let sql = render(all_of([
            None,
            Some(members::Column::Age.gte(10)),
            None,
        ]));

        assert!(sql.ends_with(r#"WHERE "members"."age" >= 10"#), "{sql}");
    }

    #[test]
    fn test_present_predicates_are_conjunctive() {
        let sql = render(all_of([
            Some(members::Column::Age.gte(10)),
            Some(members::Column::Username.eq("baz")),
        ]));

        assert!(
            sql.contains(r#""members"."age" >= 10 AND "members"."username" = 'baz'"#),
            "{sql}"
        );
    }
}
