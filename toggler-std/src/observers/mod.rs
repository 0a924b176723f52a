//! Ready-made observers.

pub mod logging;

pub use logging::LoggingObserver;
