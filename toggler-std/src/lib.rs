//! # toggler-std
//!
//! Standard implementations for the Toggler feature-toggle registry.
//!
//! This crate provides:
//! - **Observer pool**: [`ObserverPool`], the default [`ChangeNotifier`]
//! - **Standard features**: [`FnFeature`], a closure-backed feature
//! - **Standard observers**: [`LoggingObserver`]
//! - **Testing utilities**: [`testing`]
//!
//! [`ChangeNotifier`]: toggler_core::ChangeNotifier
//! [`FnFeature`]: features::FnFeature
//! [`LoggingObserver`]: observers::LoggingObserver

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use toggler_core;

// Modules
pub mod features;
pub mod observers;
pub mod pool;
pub mod testing;

pub use pool::ObserverPool;
