//! File-backed user store
//!
//! Keeps every record in memory and rewrites the whole JSON document after
//! each mutation. A single async mutex covers the id counter, the collection
//! and the file rewrite, so concurrent writers never lose updates and the
//! file always reflects the last applied mutation.

use crate::utils::FileUtils;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use userapi_domain::constants::FIRST_USER_ID;
use userapi_domain::entities::UserRecord;
use userapi_domain::error::{Error, Result};
use userapi_domain::repositories::UserRepository;

const DATA_FILE_CONTEXT: &str = "user data file";

#[derive(Debug)]
struct StoreState {
    /// `None` once the identifier space is used up
    next_id: Option<u64>,
    users: Vec<UserRecord>,
}

impl StoreState {
    fn empty() -> Self {
        Self {
            next_id: Some(FIRST_USER_ID),
            users: Vec::new(),
        }
    }

    /// Records without an id get one from the counter, in file order
    fn from_records(records: Vec<UserRecord>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|u| u.id)
            .max()
            .map_or(Some(FIRST_USER_ID), |max| max.checked_add(1));
        let mut state = Self {
            next_id,
            users: Vec::with_capacity(records.len()),
        };

        for mut user in records {
            if user.id.is_none() {
                match state.allocate_id() {
                    Ok(id) => {
                        warn!(username = %user.username, id, "Loaded user had no id, assigned one");
                        user.id = Some(id);
                    }
                    Err(e) => {
                        warn!(username = %user.username, error = %e, "Dropping loaded user without id");
                        continue;
                    }
                }
            }
            state.users.push(user);
        }
        state
    }

    fn allocate_id(&mut self) -> Result<u64> {
        let id = self
            .next_id
            .ok_or_else(|| Error::internal("identifier space exhausted"))?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == Some(id))
    }

    fn username_taken(&self, user: &UserRecord) -> bool {
        let own = user.id.and_then(|id| self.position(id));

        // A replace keeping the record's own username is allowed even when a
        // loaded file already holds duplicates of it
        if own.is_some_and(|idx| self.users[idx].username == user.username) {
            return false;
        }

        self.users
            .iter()
            .enumerate()
            .any(|(idx, u)| Some(idx) != own && u.username == user.username)
    }

    fn apply_save(&mut self, mut user: UserRecord) -> Result<UserRecord> {
        match user.id {
            None => {
                user.id = Some(self.allocate_id()?);
                self.users.push(user.clone());
            }
            Some(id) => {
                if let Some(idx) = self.position(id) {
                    self.users[idx] = user.clone();
                } else {
                    self.users.push(user.clone());
                    if self.next_id.is_some_and(|next| id >= next) {
                        self.next_id = id.checked_add(1);
                    }
                }
            }
        }
        Ok(user)
    }
}

/// JSON-file user store
///
/// # Example
///
/// ```ignore
/// let store = JsonUserStore::open("users.json").await;
/// let alice = store.save(UserRecord::new("Alice", "a@example.com", None, "alice", hash, Role::User)).await?;
/// assert_eq!(alice.id, Some(1));
/// ```
#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl JsonUserStore {
    /// Create an empty, not yet loaded store backed by `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(StoreState::empty()),
        }
    }

    /// Create a store and load the backing file
    pub async fn open<P: Into<PathBuf>>(path: P) -> Self {
        let store = Self::new(path);
        store.init().await;
        store
    }

    /// Load all records from the backing file
    ///
    /// A missing file yields an empty store. An unreadable or unparseable
    /// file is logged and also yields an empty store. The id counter is set
    /// past the highest loaded id; loaded records lacking an id are numbered
    /// from there.
    pub async fn init(&self) {
        let loaded =
            match FileUtils::read_json_if_exists::<Vec<UserRecord>, _>(&self.path, DATA_FILE_CONTEXT)
                .await
            {
                Ok(Some(users)) => {
                    info!(
                        path = %self.path.display(),
                        count = users.len(),
                        "Loaded users from data file"
                    );
                    StoreState::from_records(users)
                }
                Ok(None) => {
                    info!(path = %self.path.display(), "No user data file yet, starting empty");
                    StoreState::empty()
                }
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Could not load user data file, starting empty"
                    );
                    StoreState::empty()
                }
            };

        *self.state.lock().await = loaded;
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier the next absent-id save will receive, `None` when exhausted
    pub async fn next_id(&self) -> Option<u64> {
        self.state.lock().await.next_id
    }

    /// Rewrite the backing file; failures are logged and swallowed
    async fn persist(&self, users: &[UserRecord]) {
        match FileUtils::write_json(&self.path, &users, DATA_FILE_CONTEXT).await {
            Ok(()) => {
                restrict_permissions(&self.path).await;
                debug!(path = %self.path.display(), count = users.len(), "Persisted users");
            }
            Err(e) => error!(
                path = %self.path.display(),
                error = %e,
                "Failed to persist users; in-memory state is ahead of the data file"
            ),
        }
    }
}

#[async_trait]
impl UserRepository for JsonUserStore {
    async fn find_all(&self) -> Vec<UserRecord> {
        self.state.lock().await.users.clone()
    }

    async fn find_by_id(&self, id: u64) -> Option<UserRecord> {
        let state = self.state.lock().await;
        state.position(id).map(|idx| state.users[idx].clone())
    }

    async fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        self.state
            .lock()
            .await
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn save(&self, user: UserRecord) -> Result<UserRecord> {
        let mut state = self.state.lock().await;

        if state.username_taken(&user) {
            return Err(Error::duplicate_user("username", user.username));
        }

        let saved = state.apply_save(user)?;
        self.persist(&state.users).await;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: u64) -> bool {
        let mut state = self.state.lock().await;

        let Some(idx) = state.position(id) else {
            return false;
        };
        state.users.remove(idx);
        self.persist(&state.users).await;
        true
    }

    async fn count(&self) -> usize {
        self.state.lock().await.users.len()
    }
}

/// Limit the data file to its owner, it holds credential hashes
#[cfg(unix)]
async fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) =
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
    {
        warn!(path = %path.display(), error = %e, "Failed to restrict data file permissions");
    }
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) {}
