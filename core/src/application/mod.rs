use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{QuarryConfig, services::Service},
    infrastructure::{
        catalog::repositories::{
            order_repository::PostgresOrderRepository,
            product_repository::PostgresProductRepository,
        },
        db::postgres::Postgres,
        health::repository::PostgresHealthCheckRepository,
        member::repositories::member_repository::PostgresMemberRepository,
        team::repositories::team_repository::PostgresTeamRepository,
    },
};

pub type QuarryService = Service<
    PostgresMemberRepository,
    PostgresTeamRepository,
    PostgresProductRepository,
    PostgresOrderRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: QuarryConfig) -> Result<QuarryService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;

    Ok(create_service_with_connection(postgres.get_db()))
}

/// Wires every repository on an already opened connection.
pub fn create_service_with_connection(db: DatabaseConnection) -> QuarryService {
    Service::new(
        PostgresMemberRepository::new(db.clone()),
        PostgresTeamRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresOrderRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
    )
}
