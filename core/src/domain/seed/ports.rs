use crate::domain::{common::entities::app_errors::CoreError, seed::DemoDataReport};

pub trait DemoDataService: Send + Sync {
    fn seed_demo_data(&self) -> impl Future<Output = Result<DemoDataReport, CoreError>> + Send;

    /// Removes every member, team, order and product.
    fn clear_demo_data(&self) -> impl Future<Output = Result<DemoDataReport, CoreError>> + Send;
}
