use sea_orm::{ColumnTrait, sea_query::SimpleExpr};

use crate::{
    domain::common::has_text,
    entity::{orders, products},
};

pub fn price_goe(price: Option<i64>) -> Option<SimpleExpr> {
    price.map(|price| products::Column::Price.gte(price))
}

pub fn price_between(min_price: i64, max_price: i64) -> SimpleExpr {
    products::Column::Price.between(min_price, max_price)
}

pub fn order_of_product(product_id: i64) -> SimpleExpr {
    orders::Column::ProductId.eq(product_id)
}

pub fn status_eq(status: Option<&str>) -> Option<SimpleExpr> {
    status
        .filter(|status| has_text(status))
        .map(|status| orders::Column::Status.eq(status))
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, QueryTrait, sea_query::PostgresQueryBuilder};

    use super::*;
    use crate::infrastructure::predicates::{all_of, filter_all};

    #[test]
    fn test_price_between_is_inclusive() {
        let sql = filter_all(
            products::Entity::find(),
            all_of([Some(price_between(1000, 2000))]),
        )
        .into_query()
        .to_string(PostgresQueryBuilder);

        assert!(
            sql.contains(r#""products"."price" BETWEEN 1000 AND 2000"#),
            "{sql}"
        );
    }

    #[test]
    fn test_absent_status_adds_no_predicate() {
        let sql = filter_all(
            orders::Entity::find(),
            all_of([Some(order_of_product(7)), status_eq(None)]),
        )
        .into_query()
        .to_string(PostgresQueryBuilder);

        assert!(sql.ends_with(r#"WHERE "orders"."product_id" = 7"#), "{sql}");
        assert!(price_goe(None).is_none());
        assert!(status_eq(Some(" ")).is_none());
    }
}
