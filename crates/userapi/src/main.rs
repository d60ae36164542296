//! User API - Entry Point
//!
//! Binary entry point for the User API server. Lives in the `userapi`
//! facade crate next to the library re-exports.
//!
//! ## Configuration sources
//!
//! | Source | Example |
//! |--------|---------|
//! | File | `userapi --config userapi.toml` |
//! | Environment | `USERAPI__AUTH__JWT__SECRET=...` |
//! | Flags | `userapi --port 9090 --data-file /var/lib/userapi/users.json` |

use clap::Parser;
use userapi::Cli;
use userapi_server::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = cli.config.clone();
    run(config.as_deref(), cli.into_overrides()).await
}
