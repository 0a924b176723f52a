//! # toggler - Runtime Feature Toggles
//!
//! `toggler` keeps named features that can be switched on and off at runtime,
//! runs their lifecycle hooks on the way, and tells observers about every
//! state change.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use toggler::{FeatureRegistry, FnFeature, Subscription, testing::RecordingObserver};
//!
//! let mut registry = FeatureRegistry::new();
//! registry.add_with("Credits", FnFeature::new(0_u32).on_activate(|runs| *runs += 1), true);
//!
//! let observer = Arc::new(RecordingObserver::new());
//! registry.add_observer(&observer, Subscription::All);
//!
//! registry.set_enabled("Credits", true)?;
//!
//! assert_eq!(observer.changes(), vec![("Credits".to_string(), true)]);
//! # Ok::<(), toggler::ToggleError>(())
//! ```
//!
//! ## Pieces
//!
//! - [`Feature`] / [`FeatureBase`]: the behaviour being toggled
//! - [`FeatureProxy`]: per-feature transition policy
//! - [`FeatureRegistry`]: the facade, one per application
//! - [`ObserverPool`]: weakly held observers, per name or for all features
//!
//! ## Cargo Features
//!
//! - `macros`: `#[derive(FeatureState)]`
//! - `tracing`: `tracing` events for transitions, registrations and
//!   subscriptions

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod registry;

pub use toggler_core::{
    // Observation
    ChangeNotifier,
    // Feature
    Feature,
    FeatureBase,
    FeatureObserver,
    // Proxy
    FeatureProxy,
    FeatureState,
    // Status
    FeatureStatus,
    ObserverHandle,
    // Error types
    Result,
    Subscription,
    ToggleError,
    Toggler,
};

// Standard implementations
pub use toggler_std::{
    ObserverPool,
    features::FnFeature,
    observers::LoggingObserver,
    testing,
};

// Registry
pub use registry::{FeatureRegistry, RegistryBuilder};

#[cfg(feature = "macros")]
pub use toggler_macros::FeatureState;
