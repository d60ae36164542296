//! Repository Interfaces
//!
//! Interfaces for data persistence and retrieval operations.
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`UserRepository`] | Persistence operations for user records |

/// User repository interface
pub mod user_repository;

pub use user_repository::UserRepository;
