//! Authentication for the swap API.
//!
//! Requests are authenticated with a single opaque token sent in the
//! `x-auth-token` header. This module provides:
//! - A redacting wrapper for the token value
//! - The per-client in-memory token slot
//! - Reading a token from the environment

mod token;

pub use token::{AUTH_TOKEN_ENV_VAR, AuthToken, EnvToken, TokenStore};

/// Header carrying the auth token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";
