use std::sync::Arc;

use rostra_core::application::RostraService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RostraService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RostraService) -> Self {
        Self { args, service }
    }
}
