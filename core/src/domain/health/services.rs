use crate::domain::{
    catalog::ports::{OrderRepository, ProductRepository},
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    member::ports::MemberRepository,
    team::ports::TeamRepository,
};

impl<M, T, P, O, HC> HealthCheckService for Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
