//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod storage;

// Re-export main types
pub use app::*;
