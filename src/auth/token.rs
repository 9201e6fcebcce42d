//! Auth token handling for the swap API.

use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the auth token.
pub const AUTH_TOKEN_ENV_VAR: &str = "ZOS_AUTH_TOKEN";

/// An opaque auth token (a JWT or a base64-encoded third-party token).
///
/// The client never parses or validates it. The value is kept in a
/// [`SecretString`] and redacted from `Debug` output.
#[derive(Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Get the raw token value.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// The in-memory slot holding a client's current token.
///
/// Readers take a snapshot, so a request that already captured a token keeps
/// it even if the slot is replaced or cleared afterwards.
#[derive(Default)]
pub struct TokenStore {
    current: RwLock<Option<AuthToken>>,
}

impl TokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an initial token.
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            current: RwLock::new(Some(token)),
        }
    }

    /// Replace the current token unconditionally.
    pub fn set(&self, token: AuthToken) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(token);
    }

    /// Remove the current token.
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Snapshot the current token.
    pub fn get(&self) -> Option<AuthToken> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Check if a token is set.
    pub fn is_set(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_token", &self.is_set())
            .finish()
    }
}

/// Reads an auth token from the environment.
///
/// By default, reads from `ZOS_AUTH_TOKEN`.
pub struct EnvToken;

impl EnvToken {
    /// Read the token from the default environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env() -> Option<AuthToken> {
        Self::try_from_env_var(AUTH_TOKEN_ENV_VAR)
    }

    /// Read the token from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env_var(var: &str) -> Option<AuthToken> {
        std::env::var(var)
            .ok()
            .filter(|token| !token.is_empty())
            .map(AuthToken::new)
    }
}
