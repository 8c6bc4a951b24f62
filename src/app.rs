use std::sync::Arc;

use crate::{auth::Authenticator, config};

#[derive(Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl App {
    pub fn new(config: config::Server, authenticator: impl Authenticator) -> Self {
        Self {
            config: Arc::new(config),
            authenticator: Arc::new(authenticator),
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
