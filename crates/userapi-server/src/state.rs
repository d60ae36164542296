//! Shared application state

use std::sync::Arc;
use userapi_infrastructure::{JsonUserStore, PasswordService, TokenCodec};

/// Services shared by every handler, managed by Rocket
#[derive(Debug, Clone)]
pub struct AppState {
    /// User persistence
    pub store: Arc<JsonUserStore>,
    /// Token issuance and verification
    pub tokens: Arc<TokenCodec>,
    /// Credential hashing
    pub passwords: PasswordService,
}

impl AppState {
    /// Create application state
    pub fn new(store: Arc<JsonUserStore>, tokens: Arc<TokenCodec>) -> Self {
        Self {
            store,
            tokens,
            passwords: PasswordService::new(),
        }
    }
}
