//! # toggler-core
//!
//! Core traits for the Toggler feature-toggle registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that implement features or observers without pulling in the
//! registry itself.
//!
//! # Building Blocks
//!
//! ## Feature ([`Feature`])
//!
//! A unit of toggleable behaviour. Concrete features embed a [`FeatureBase`]
//! holding their payload and initial enabled flag, and override the
//! [`activate`](Feature::activate) / [`deactivate`](Feature::deactivate)
//! hooks.
//!
//! ## Proxy ([`FeatureProxy`])
//!
//! Owns one feature, its live enabled flag and its transition policy. It is
//! the only caller of the lifecycle hooks.
//!
//! ## Observation ([`FeatureObserver`], [`ChangeNotifier`])
//!
//! Observers are held weakly through [`ObserverHandle`] and subscribe with a
//! [`Subscription`]. A [`ChangeNotifier`] fans state changes out to them.
//!
//! ## Toggling ([`Toggler`])
//!
//! The narrow surface a presentation layer needs: a sorted
//! [`FeatureStatus`] snapshot and the ability to request a state change.
//!
//! # Error Types
//!
//! - [`ToggleError`] - Lookup errors for unknown feature names

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod feature;
mod notifier;
mod observer;
mod proxy;
mod status;

// Re-exports
pub use error::{Result, ToggleError};
pub use feature::{Feature, FeatureBase, FeatureState};
pub use notifier::ChangeNotifier;
pub use observer::{FeatureObserver, ObserverHandle, Subscription};
pub use proxy::FeatureProxy;
pub use status::{FeatureStatus, Toggler};
