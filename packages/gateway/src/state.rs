use std::sync::Arc;

use civic::ConfigStatus;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::services::Services;

/// Shared server state, built once at startup.
///
/// When configuration is incomplete the state carries no services, and every
/// server function that needs them refuses the call.
#[derive(Clone)]
pub struct AppState {
    services: Option<Arc<Services>>,
    status: ConfigStatus,
}

impl AppState {
    pub fn from_config(config: Result<AppConfig, ConfigError>) -> Self {
        match config {
            Ok(config) => {
                info!(
                    backend = %config.backend_url,
                    model = %config.completion.model,
                    "services configured"
                );
                Self {
                    services: Some(Arc::new(Services::new(&config))),
                    status: ConfigStatus::ready(),
                }
            }
            Err(err) => {
                warn!(error = %err, "services unavailable, AI features disabled");
                Self {
                    services: None,
                    status: err.status(),
                }
            }
        }
    }

    pub fn status(&self) -> &ConfigStatus {
        &self.status
    }

    pub fn services(&self) -> Option<&Services> {
        self.services.as_deref()
    }
}
