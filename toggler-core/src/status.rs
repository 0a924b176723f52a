//! Read-only status view and the toggling surface for presentation layers.

use crate::error::Result;

/// Name and enabled state of one registered feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureStatus {
    /// Registered feature name.
    pub name: String,
    /// Whether the feature is enabled.
    pub is_enabled: bool,
}

impl FeatureStatus {
    /// Creates a status entry.
    pub fn new(name: impl Into<String>, is_enabled: bool) -> Self {
        Self {
            name: name.into(),
            is_enabled,
        }
    }
}

/// Everything a feature list UI needs from the registry.
pub trait Toggler {
    /// Every feature with its state, sorted by name ascending.
    fn features_status(&self) -> Vec<FeatureStatus>;

    /// Requests an enabled-state change for `name`.
    ///
    /// # Errors
    ///
    /// [`ToggleError::FeatureNotFound`](crate::ToggleError::FeatureNotFound)
    /// if `name` is not registered.
    fn set_enabled(&mut self, name: &str, is_enabled: bool) -> Result<()>;
}
