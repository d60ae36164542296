//! User entity and role definitions

use crate::constants::ROLE_AUTHORITY_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User roles, ordered from most to least privileged
///
/// - `Admin`: full access including user creation and deletion
/// - `Manager`: can read and update users, cannot create or delete
/// - `User`: read-only access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Administrator
    Admin,
    /// Manager
    Manager,
    /// Regular user
    #[default]
    User,
}

impl Role {
    /// All roles, most privileged first
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::User];

    /// Roles allowed to update existing users
    pub const USER_EDITORS: &'static [Role] = &[Role::Admin, Role::Manager];

    /// Roles allowed to create and delete users
    pub const USER_ADMINS: &'static [Role] = &[Role::Admin];

    /// Role name as stored (`ADMIN`, `MANAGER`, `USER`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::User => "USER",
        }
    }

    /// Authority label embedded in tokens (`ROLE_ADMIN`, ...)
    pub fn authority(&self) -> String {
        format!("{ROLE_AUTHORITY_PREFIX}{}", self.as_str())
    }

    /// Resolve a role from its authority label
    pub fn from_authority(authority: &str) -> Option<Self> {
        authority
            .strip_prefix(ROLE_AUTHORITY_PREFIX)
            .and_then(|name| name.parse().ok())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Case-insensitive role name (`admin`, `Manager`, `USER`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "USER" => Ok(Role::User),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// Stored user record
///
/// This is the shape persisted in the backing file. `password` holds the
/// one-way hash and is never exposed through [`UserView`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identifier, absent until the store assigns one
    #[serde(default)]
    pub id: Option<u64>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Login name (case-sensitive)
    #[serde(default)]
    pub username: String,
    /// Password hash (PHC string)
    #[serde(default)]
    pub password: String,
    /// Role
    #[serde(default)]
    pub role: Role,
    /// Whether the account may log in
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl UserRecord {
    /// Create a new, not yet stored, user record
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: Option<u32>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            age,
            username: username.into(),
            password: password_hash.into(),
            role,
            enabled: true,
        }
    }

    /// Set an explicit identifier
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Public projection without the credential hash
    pub fn view(&self) -> UserView {
        UserView::from(self)
    }
}

impl Default for UserRecord {
    fn default() -> Self {
        Self::new("", "", None, "", "", Role::default())
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("age", &self.age)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Public-safe user projection returned by the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// Identifier
    pub id: Option<u64>,
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Role
    pub role: Role,
    /// Whether the account may log in
    pub enabled: bool,
}

impl From<&UserRecord> for UserView {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age,
            role: user.role,
            enabled: user.enabled,
        }
    }
}
