//! Server initialization
//!
//! Loads configuration, installs logging, opens the user store, builds the
//! token codec and launches the HTTP server.

use crate::state::AppState;
use crate::transport::launch;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use userapi_infrastructure::config::{AppConfig, ConfigLoader};
use userapi_infrastructure::logging::init_logging;
use userapi_infrastructure::{JsonUserStore, TokenCodec};

/// Command-line overrides applied on top of loaded configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `storage.data_file`
    pub data_file: Option<PathBuf>,
    /// Replaces `server.port`
    pub port: Option<u16>,
}

impl ConfigOverrides {
    /// Apply overrides to `config`
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(data_file) = &self.data_file {
            config.storage.data_file.clone_from(data_file);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Load configuration from an optional file path
pub fn load_config(config_path: Option<&Path>) -> userapi_domain::error::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Build application state from configuration
pub async fn build_state(config: &AppConfig) -> userapi_domain::error::Result<AppState> {
    let tokens = TokenCodec::from_config(&config.auth.jwt)?;

    let store = JsonUserStore::open(&config.storage.data_file).await;
    Ok(AppState::new(Arc::new(store), Arc::new(tokens)))
}

/// Run the User API server
pub async fn run(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config);
    init_logging(&config.logging)?;

    info!(
        data_file = %config.storage.data_file.display(),
        token_ttl_secs = config.auth.jwt.expiration_secs,
        "Starting User API"
    );

    let state = build_state(&config).await?;
    launch(state, &config.server).await
}
