//! User Repository Interface
//!
//! Durable CRUD over [`UserRecord`] keyed by a numeric identifier.

use crate::entities::UserRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Repository: user persistence
///
/// # Example
///
/// ```ignore
/// use userapi_domain::entities::{Role, UserRecord};
///
/// let saved = repo.save(UserRecord::new("Alice", "a@example.com", Some(30), "alice", hash, Role::User)).await?;
/// assert_eq!(saved.id, Some(1));
///
/// let found = repo.find_by_username("alice").await;
/// assert!(repo.delete_by_id(1).await);
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of every record in insertion order
    ///
    /// The returned vector is a copy; mutating it never touches the store.
    async fn find_all(&self) -> Vec<UserRecord>;

    /// Record with the given identifier
    async fn find_by_id(&self, id: u64) -> Option<UserRecord>;

    /// First record (insertion order) whose username matches exactly
    async fn find_by_username(&self, username: &str) -> Option<UserRecord>;

    /// Create or replace a record
    ///
    /// - `id == None`: a fresh identifier is assigned and the record appended
    /// - `id` present and stored: replaced in place
    /// - `id` present and unknown: appended with the caller's identifier
    ///
    /// Fails only when the username already belongs to a different record.
    async fn save(&self, user: UserRecord) -> Result<UserRecord>;

    /// Remove a record; `false` when nothing matched
    async fn delete_by_id(&self, id: u64) -> bool;

    /// Number of stored records
    async fn count(&self) -> usize {
        self.find_all().await.len()
    }
}
