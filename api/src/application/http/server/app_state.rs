use std::sync::Arc;

use quarry_core::application::QuarryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: QuarryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: QuarryService) -> Self {
        Self { args, service }
    }
}
