//! # Feature
//!
//! A feature is a unit of behaviour that can be switched on and off at
//! runtime. Every feature carries a [`FeatureBase`] with an opaque payload and
//! its initial enabled flag, and implements two lifecycle hooks:
//!
//! - [`Feature::activate`] runs the feature. It has no meaningful default:
//!   a feature that never overrides it panics when run.
//! - [`Feature::deactivate`] tears it down when it gets disabled. Defaults to
//!   doing nothing.
//!
//! The flag in [`FeatureBase`] only seeds the owning
//! [`FeatureProxy`](crate::FeatureProxy) when the feature is wrapped. From
//! then on the proxy holds the live flag, so nothing a feature does to its own
//! state can move it past the transition policy.
//!
//! # Example
//!
//! ```rust
//! use toggler_core::{Feature, FeatureBase, FeatureState};
//!
//! struct Banner {
//!     base: FeatureBase<String>,
//!     shown: bool,
//! }
//!
//! impl FeatureState for Banner {
//!     type Payload = String;
//!
//!     fn state(&self) -> &FeatureBase<String> {
//!         &self.base
//!     }
//!
//!     fn state_mut(&mut self) -> &mut FeatureBase<String> {
//!         &mut self.base
//!     }
//! }
//!
//! impl Feature for Banner {
//!     fn activate(&mut self) {
//!         self.shown = true;
//!     }
//!
//!     fn deactivate(&mut self) {
//!         self.shown = false;
//!     }
//! }
//! ```

use std::any::type_name;

/// Payload and initial enabled flag shared by every feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureBase<P> {
    payload: P,
    initially_enabled: bool,
}

impl<P> FeatureBase<P> {
    /// Creates a disabled feature state around `payload`.
    pub const fn new(payload: P) -> Self {
        Self {
            payload,
            initially_enabled: false,
        }
    }

    /// Creates a feature state with an explicit initial flag.
    pub const fn with_enabled(payload: P, initially_enabled: bool) -> Self {
        Self {
            payload,
            initially_enabled,
        }
    }

    /// Returns the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the payload mutably.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Consumes the state, returning the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// The flag the feature starts with once registered.
    ///
    /// Ask the proxy or the registry for the current state.
    pub fn initially_enabled(&self) -> bool {
        self.initially_enabled
    }
}

/// Access to the [`FeatureBase`] embedded in a feature.
///
/// With the `macros` feature of `toggler` this can be derived for any struct
/// with a `FeatureBase<P>` field.
pub trait FeatureState {
    /// The opaque payload type. The registry never inspects it.
    type Payload;

    /// Returns the embedded state.
    fn state(&self) -> &FeatureBase<Self::Payload>;

    /// Returns the embedded state mutably.
    fn state_mut(&mut self) -> &mut FeatureBase<Self::Payload>;

    /// Returns the payload.
    fn payload(&self) -> &Self::Payload {
        self.state().payload()
    }
}

impl<P> FeatureState for FeatureBase<P> {
    type Payload = P;

    fn state(&self) -> &FeatureBase<P> {
        self
    }

    fn state_mut(&mut self) -> &mut FeatureBase<P> {
        self
    }
}

/// A toggleable unit of behaviour.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Feature`",
    label = "missing `Feature` implementation",
    note = "Features must implement `FeatureState` and override `activate`."
)]
pub trait Feature: FeatureState + Send + 'static {
    /// Runs the feature.
    ///
    /// # Panics
    ///
    /// The default body panics: a feature that can be run must say what
    /// running it does.
    fn activate(&mut self) {
        unimplemented!("`{}` does not implement `Feature::activate`", type_name::<Self>())
    }

    /// Called when the feature goes from enabled to disabled.
    fn deactivate(&mut self) {}
}

/// The bare base state is a feature with no behaviour of its own.
impl<P: Send + 'static> Feature for FeatureBase<P> {}

/// Object-safe view of a feature with its payload type erased.
pub(crate) trait DynFeature: Send {
    fn initially_enabled_dyn(&self) -> bool;
    fn activate_dyn(&mut self);
    fn deactivate_dyn(&mut self);
    fn type_name_dyn(&self) -> &'static str;
}

impl<F: Feature> DynFeature for F {
    fn initially_enabled_dyn(&self) -> bool {
        self.state().initially_enabled()
    }

    fn activate_dyn(&mut self) {
        self.activate();
    }

    fn deactivate_dyn(&mut self) {
        self.deactivate();
    }

    fn type_name_dyn(&self) -> &'static str {
        type_name::<F>()
    }
}
