use super::storage;

/// Credentials attached to one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Reads the persisted token. Called once per request so a login in
    /// another tab is picked up without reloading.
    pub fn from_storage() -> Self {
        Self {
            token: storage::get_access_token(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Source of the auth context for each request.
pub type AuthSource = fn() -> AuthContext;
