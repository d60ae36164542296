//! # User API
//!
//! User management REST service with stateless bearer token
//! authentication and a single-file JSON user store.
//!
//! ```ignore
//! use userapi::infrastructure::TokenCodec;
//!
//! let codec = TokenCodec::new(Some("a-long-enough-signing-secret-value"), 3600);
//! let token = codec.issue("alice", "ROLE_ADMIN")?;
//! assert_eq!(codec.extract_username(&token)?, "alice");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, errors, token claims and the repository port
//! - `infrastructure` - config, logging, token codec, hashing, file store
//! - `server` - Rocket routes, authentication filter and error mapping

use clap::Parser;
use std::path::PathBuf;

/// Domain layer - entities, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use userapi_domain::*;
}

/// Infrastructure layer - config, logging, tokens and storage
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use userapi_infrastructure::*;
}

/// Server layer - HTTP routes and handlers
///
/// Re-exports from the server crate for convenience
pub mod server {
    pub use userapi_server::*;
}

pub use server::{ConfigOverrides, run};

/// Command line interface for the User API
#[derive(Parser, Debug)]
#[command(name = "userapi")]
#[command(about = "User API - user management REST service")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the user data file location
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Override the HTTP port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Flags that replace values from the config file and environment
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            data_file: self.data_file,
            port: self.port,
        }
    }
}
