//! Ready-made feature implementations.

pub mod closure;

pub use closure::FnFeature;
