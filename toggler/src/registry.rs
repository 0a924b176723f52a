//! Feature registry.
//!
//! [`FeatureRegistry`] is the facade over everything else: it owns a proxy per
//! registered name and the [`ChangeNotifier`] that observers subscribe to.
//! There is no global instance; the application owns the registry and hands
//! out references to whoever needs it.

use std::{collections::HashMap, sync::Arc};
use toggler_core::{
    ChangeNotifier, Feature, FeatureObserver, FeatureProxy, FeatureStatus, ObserverHandle,
    Result, Subscription, ToggleError, Toggler,
};
use toggler_std::ObserverPool;

/// Name-keyed registry of features.
///
/// # Example
/// ```
/// use toggler::{FeatureRegistry, FnFeature};
///
/// let mut registry = FeatureRegistry::new();
/// registry.add_with("Credits", FnFeature::new(()).on_activate(|_| {}), true);
///
/// registry.set_enabled("Credits", true)?;
/// assert!(registry.is_enabled("Credits")?);
/// # Ok::<(), toggler::ToggleError>(())
/// ```
#[derive(Debug)]
pub struct FeatureRegistry<N = ObserverPool> {
    entries: HashMap<String, FeatureProxy>,
    notifier: N,
}

impl FeatureRegistry {
    /// Creates an empty registry backed by an [`ObserverPool`].
    pub fn new() -> Self {
        Self::with_notifier(ObserverPool::new())
    }

    /// Starts building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ChangeNotifier> FeatureRegistry<N> {
    /// Creates an empty registry that notifies through `notifier`.
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            entries: HashMap::new(),
            notifier,
        }
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // ------------------------------------------------------------------------
    // Features
    // ------------------------------------------------------------------------

    /// Registers `feature` under `name`; it is only run when asked to.
    ///
    /// See [`add_with`](Self::add_with).
    pub fn add<F: Feature>(&mut self, name: impl Into<String>, feature: F) {
        self.add_with(name, feature, false);
    }

    /// Registers `feature` under `name`.
    ///
    /// With `run_on_enable`, enabling the feature also runs it. An existing
    /// feature under the same name is replaced and dropped as-is: its
    /// `deactivate` hook is not called, even if it was enabled.
    pub fn add_with<F: Feature>(&mut self, name: impl Into<String>, feature: F, run_on_enable: bool) {
        let name = name.into();
        let proxy = FeatureProxy::new(feature, run_on_enable);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            feature = %name,
            kind = proxy.feature_type(),
            is_enabled = proxy.is_enabled(),
            run_on_enable,
            "Registering feature"
        );

        let previous = self.entries.insert(name, proxy);
        #[cfg(feature = "tracing")]
        {
            if let Some(previous) = previous.filter(FeatureProxy::is_enabled) {
                tracing::warn!(
                    kind = previous.feature_type(),
                    "Replaced an enabled feature without deactivating it"
                );
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = previous; // Dropped as-is
        }
    }

    /// Changes whether enabling `name` also runs it.
    ///
    /// # Errors
    ///
    /// [`ToggleError::FeatureNotFound`] if `name` is not registered.
    pub fn update(&mut self, name: &str, run_on_enable: bool) -> Result<()> {
        self.proxy_mut(name)?.set_should_run_on_enable(run_on_enable);
        Ok(())
    }

    /// Removes `name`, dropping its feature. Unknown names are ignored.
    ///
    /// Returns whether a feature was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.entries.remove(name).is_some();

        #[cfg(feature = "tracing")]
        {
            if removed {
                tracing::debug!(feature = name, "Removed feature");
            }
        }

        removed
    }

    /// Removes every feature.
    pub fn remove_all(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(count = self.entries.len(), "Removing all features");

        self.entries.clear();
    }

    /// Runs `name` if it is enabled.
    ///
    /// Returns `false` if the feature is disabled and was not run.
    ///
    /// # Errors
    ///
    /// [`ToggleError::FeatureNotFound`] if `name` is not registered.
    pub fn run(&mut self, name: &str) -> Result<bool> {
        Ok(self.proxy_mut(name)?.run())
    }

    /// Whether `name` is enabled.
    ///
    /// # Errors
    ///
    /// [`ToggleError::FeatureNotFound`] if `name` is not registered.
    pub fn is_enabled(&self, name: &str) -> Result<bool> {
        Ok(self.proxy(name)?.is_enabled())
    }

    /// Enables or disables `name`, then notifies its observers.
    ///
    /// Observers are notified with the resulting state even when the write
    /// did not change anything.
    ///
    /// # Errors
    ///
    /// [`ToggleError::FeatureNotFound`] if `name` is not registered. Nobody
    /// is notified in that case.
    pub fn set_enabled(&mut self, name: &str, is_enabled: bool) -> Result<()> {
        let proxy = self
            .entries
            .get_mut(name)
            .ok_or_else(|| ToggleError::not_found(name))?;
        proxy.set_enabled(is_enabled);
        self.notifier.notify(name, proxy);
        Ok(())
    }

    /// Every feature with its state, sorted by name ascending.
    pub fn status_snapshot(&self) -> Vec<FeatureStatus> {
        let mut status: Vec<_> = self
            .entries
            .iter()
            .map(|(name, proxy)| FeatureStatus::new(name.clone(), proxy.is_enabled()))
            .collect();
        status.sort_by(|a, b| a.name.cmp(&b.name));
        status
    }

    /// Number of registered features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no feature is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn proxy(&self, name: &str) -> Result<&FeatureProxy> {
        self.entries
            .get(name)
            .ok_or_else(|| ToggleError::not_found(name))
    }

    fn proxy_mut(&mut self, name: &str) -> Result<&mut FeatureProxy> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| ToggleError::not_found(name))
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    /// Subscribes `observer` to changes.
    ///
    /// The registry keeps only a weak reference: dropping the last `Arc`
    /// ends the subscription.
    pub fn add_observer<O: FeatureObserver>(
        &mut self,
        observer: &Arc<O>,
        subscription: impl Into<Subscription>,
    ) {
        let subscription = subscription.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(?subscription, "Adding observer");

        self.notifier
            .add_observer(ObserverHandle::from_arc(observer), &subscription);
    }

    /// Unsubscribes `observer`.
    ///
    /// [`Subscription::All`] removes it from every subscription it holds,
    /// not only from the all-features one.
    pub fn remove_observer<O: FeatureObserver>(
        &mut self,
        observer: &Arc<O>,
        subscription: impl Into<Subscription>,
    ) {
        let subscription = subscription.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(?subscription, "Removing observer");

        self.notifier
            .remove_observer(&ObserverHandle::from_arc(observer), &subscription);
    }
}

impl<N: ChangeNotifier> Toggler for FeatureRegistry<N> {
    fn features_status(&self) -> Vec<FeatureStatus> {
        self.status_snapshot()
    }

    fn set_enabled(&mut self, name: &str, is_enabled: bool) -> Result<()> {
        FeatureRegistry::set_enabled(self, name, is_enabled)
    }
}

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for a [`FeatureRegistry`] with features registered up front.
///
/// # Example
/// ```ignore
/// let registry = FeatureRegistry::builder()
///     .register("Credits", credits)
///     .register_with("Onboarding", onboarding, true)
///     .notifier(SpyNotifier::new())
///     .build();
/// ```
#[derive(Debug)]
pub struct RegistryBuilder<N = ObserverPool> {
    entries: Vec<(String, FeatureProxy)>,
    notifier: N,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            notifier: ObserverPool::new(),
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ChangeNotifier> RegistryBuilder<N> {
    /// Register a feature that is only run when asked to.
    pub fn register<F: Feature>(self, name: impl Into<String>, feature: F) -> Self {
        self.register_with(name, feature, false)
    }

    /// Register a feature with its run-on-enable policy.
    ///
    /// Later registrations replace earlier ones under the same name.
    pub fn register_with<F: Feature>(
        mut self,
        name: impl Into<String>,
        feature: F,
        run_on_enable: bool,
    ) -> Self {
        self.entries
            .push((name.into(), FeatureProxy::new(feature, run_on_enable)));
        self
    }

    /// Use `notifier` instead of the default observer pool.
    pub fn notifier<M: ChangeNotifier>(self, notifier: M) -> RegistryBuilder<M> {
        RegistryBuilder {
            entries: self.entries,
            notifier,
        }
    }

    /// Get the number of registrations so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the registry.
    pub fn build(self) -> FeatureRegistry<N> {
        FeatureRegistry {
            entries: self.entries.into_iter().collect(),
            notifier: self.notifier,
        }
    }
}
