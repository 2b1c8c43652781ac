use crate::domain::{
    catalog::ports::{OrderRepository, ProductRepository},
    health::ports::HealthCheckRepository,
    member::ports::MemberRepository,
    team::ports::TeamRepository,
};

#[derive(Clone)]
pub struct Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    pub(crate) member_repository: M,
    pub(crate) team_repository: T,
    pub(crate) product_repository: P,
    pub(crate) order_repository: O,
    pub(crate) health_check_repository: HC,
}

impl<M, T, P, O, HC> Service<M, T, P, O, HC>
where
    M: MemberRepository,
    T: TeamRepository,
    P: ProductRepository,
    O: OrderRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        member_repository: M,
        team_repository: T,
        product_repository: P,
        order_repository: O,
        health_check_repository: HC,
    ) -> Self {
        Self {
            member_repository,
            team_repository,
            product_repository,
            order_repository,
            health_check_repository,
        }
    }
}
