use std::sync::Arc;

use pantrycam_core::application::PantryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryService) -> Self {
        Self { args, service }
    }
}
