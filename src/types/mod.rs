//! Common types used across the swap client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
