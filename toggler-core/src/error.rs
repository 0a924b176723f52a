//! Error types for Toggler.
//!
//! Looking up a name that was never registered (or was removed) is the only
//! recoverable failure. It signals a stale name on the caller's side and is
//! surfaced as-is, never retried or swallowed.

use thiserror::Error;

/// Errors returned by registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// No feature is registered under the given name.
    #[error("feature not found: {0}")]
    FeatureNotFound(String),
}

impl ToggleError {
    /// Creates a [`ToggleError::FeatureNotFound`] for `name`.
    pub fn not_found(name: impl Into<String>) -> Self {
        ToggleError::FeatureNotFound(name.into())
    }
}

/// Result alias used throughout Toggler.
pub type Result<T, E = ToggleError> = std::result::Result<T, E>;
