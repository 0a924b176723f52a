//! Testing utilities for Toggler.
//!
//! This module provides test doubles for features, observers and notifiers.
//!
//! # Features
//!
//! - [`RecordingObserver`]: An observer that records every change it receives
//! - [`CountingFeature`]: A feature that counts hook invocations
//! - [`SpyNotifier`]: A notifier that records subscriptions and notifications

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use toggler_core::{
    ChangeNotifier, Feature, FeatureBase, FeatureObserver, FeatureProxy, FeatureState,
    ObserverHandle, Subscription,
};

// ============================================================================
// Recording Observer
// ============================================================================

/// An observer that records all changes it receives.
///
/// # Example
///
/// ```rust,ignore
/// let observer = Arc::new(RecordingObserver::new());
/// registry.add_observer(&observer, Subscription::All);
///
/// registry.set_enabled("Credits", true)?;
///
/// assert_eq!(observer.changes(), vec![("Credits".to_string(), true)]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    changes: Mutex<Vec<(String, bool)>>,
}

impl RecordingObserver {
    /// Create a new recording observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded changes, oldest first.
    pub fn changes(&self) -> Vec<(String, bool)> {
        self.changes.lock().unwrap().clone()
    }

    /// Get the most recent change.
    pub fn last(&self) -> Option<(String, bool)> {
        self.changes.lock().unwrap().last().cloned()
    }

    /// Get the number of recorded changes.
    pub fn count(&self) -> usize {
        self.changes.lock().unwrap().len()
    }

    /// Clear all recorded changes.
    pub fn clear(&self) {
        self.changes.lock().unwrap().clear();
    }
}

impl FeatureObserver for RecordingObserver {
    fn feature_did_change(&self, name: &str, is_enabled: bool) {
        self.changes
            .lock()
            .unwrap()
            .push((name.to_string(), is_enabled));
    }
}

// ============================================================================
// Counting Feature
// ============================================================================

/// Shared hook counters for a [`CountingFeature`].
///
/// The feature moves into the registry; keep a clone of this to inspect it.
#[derive(Debug, Default, Clone)]
pub struct HookCounts {
    activate: Arc<AtomicUsize>,
    deactivate: Arc<AtomicUsize>,
}

impl HookCounts {
    /// Number of `activate` calls so far.
    pub fn activated(&self) -> usize {
        self.activate.load(Ordering::SeqCst)
    }

    /// Number of `deactivate` calls so far.
    pub fn deactivated(&self) -> usize {
        self.deactivate.load(Ordering::SeqCst)
    }

    /// Reset both counters.
    pub fn reset(&self) {
        self.activate.store(0, Ordering::SeqCst);
        self.deactivate.store(0, Ordering::SeqCst);
    }
}

/// A feature that counts its hook invocations.
///
/// # Example
///
/// ```rust,ignore
/// let (feature, counts) = CountingFeature::new();
/// registry.add_with("Credits", feature, true);
///
/// registry.set_enabled("Credits", true)?;
///
/// assert_eq!(counts.activated(), 1);
/// ```
#[derive(Debug)]
pub struct CountingFeature {
    state: FeatureBase<()>,
    counts: HookCounts,
}

impl CountingFeature {
    /// Create a disabled counting feature and its counters.
    pub fn new() -> (Self, HookCounts) {
        Self::with_enabled(false)
    }

    /// Create a counting feature with an explicit initial flag.
    pub fn with_enabled(is_enabled: bool) -> (Self, HookCounts) {
        let counts = HookCounts::default();
        let feature = Self {
            state: FeatureBase::with_enabled((), is_enabled),
            counts: counts.clone(),
        };
        (feature, counts)
    }
}

impl FeatureState for CountingFeature {
    type Payload = ();

    fn state(&self) -> &FeatureBase<()> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FeatureBase<()> {
        &mut self.state
    }
}

impl Feature for CountingFeature {
    fn activate(&mut self) {
        self.counts.activate.fetch_add(1, Ordering::SeqCst);
    }

    fn deactivate(&mut self) {
        self.counts.deactivate.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Spy Notifier
// ============================================================================

/// A notifier that records what the registry asks of it.
///
/// Clones share their records, so one clone can be handed to the registry
/// while the test keeps another.
#[derive(Debug, Default, Clone)]
pub struct SpyNotifier {
    added: Arc<Mutex<Vec<Subscription>>>,
    removed: Arc<Mutex<Vec<Subscription>>>,
    notified: Arc<Mutex<Vec<(String, bool)>>>,
}

impl SpyNotifier {
    /// Create a new spy notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriptions passed to `add_observer`, in call order.
    pub fn added(&self) -> Vec<Subscription> {
        self.added.lock().unwrap().clone()
    }

    /// Subscriptions passed to `remove_observer`, in call order.
    pub fn removed(&self) -> Vec<Subscription> {
        self.removed.lock().unwrap().clone()
    }

    /// Name and state passed to each `notify` call, in call order.
    pub fn notified(&self) -> Vec<(String, bool)> {
        self.notified.lock().unwrap().clone()
    }
}

impl ChangeNotifier for SpyNotifier {
    fn add_observer(&mut self, _observer: ObserverHandle, subscription: &Subscription) {
        self.added.lock().unwrap().push(subscription.clone());
    }

    fn remove_observer(&mut self, _observer: &ObserverHandle, subscription: &Subscription) {
        self.removed.lock().unwrap().push(subscription.clone());
    }

    fn notify(&self, name: &str, feature: &FeatureProxy) {
        self.notified
            .lock()
            .unwrap()
            .push((name.to_string(), feature.is_enabled()));
    }
}
