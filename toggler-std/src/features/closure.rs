//! Closure-backed feature.

use std::fmt;
use toggler_core::{Feature, FeatureBase, FeatureState};

type HookFn<P> = Box<dyn FnMut(&mut P) + Send>;

/// A feature whose hooks are closures over its payload.
///
/// Useful when a feature is small enough not to deserve its own type.
///
/// # Example
///
/// ```rust
/// use toggler_std::features::FnFeature;
///
/// let feature = FnFeature::new(Vec::<&str>::new())
///     .on_activate(|log| log.push("shown"))
///     .on_deactivate(|log| log.push("hidden"));
/// ```
pub struct FnFeature<P> {
    state: FeatureBase<P>,
    on_activate: Option<HookFn<P>>,
    on_deactivate: Option<HookFn<P>>,
}

impl<P> FnFeature<P> {
    /// Creates a disabled feature around `payload`.
    pub fn new(payload: P) -> Self {
        Self::with_enabled(payload, false)
    }

    /// Creates a feature with an explicit initial flag.
    pub fn with_enabled(payload: P, initially_enabled: bool) -> Self {
        Self {
            state: FeatureBase::with_enabled(payload, initially_enabled),
            on_activate: None,
            on_deactivate: None,
        }
    }

    /// Sets the hook run by [`Feature::activate`].
    pub fn on_activate<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut P) + Send + 'static,
    {
        self.on_activate = Some(Box::new(hook));
        self
    }

    /// Sets the hook run by [`Feature::deactivate`].
    pub fn on_deactivate<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut P) + Send + 'static,
    {
        self.on_deactivate = Some(Box::new(hook));
        self
    }
}

impl<P> FeatureState for FnFeature<P> {
    type Payload = P;

    fn state(&self) -> &FeatureBase<P> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FeatureBase<P> {
        &mut self.state
    }
}

impl<P: Send + 'static> Feature for FnFeature<P> {
    /// # Panics
    ///
    /// Panics if no activate hook was given.
    fn activate(&mut self) {
        match self.on_activate.as_mut() {
            Some(hook) => hook(self.state.payload_mut()),
            None => unimplemented!("`FnFeature` has no activate hook"),
        }
    }

    fn deactivate(&mut self) {
        if let Some(hook) = self.on_deactivate.as_mut() {
            hook(self.state.payload_mut());
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for FnFeature<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFeature")
            .field("state", &self.state)
            .field("on_activate", &self.on_activate.is_some())
            .field("on_deactivate", &self.on_deactivate.is_some())
            .finish()
    }
}
