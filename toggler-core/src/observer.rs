//! # Observers
//!
//! Observers are told when a feature's enabled state is written through the
//! registry. They are held weakly: subscribing never keeps an observer alive,
//! and an observer dropped elsewhere is silently skipped.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, Weak},
};

/// Receives feature state changes.
pub trait FeatureObserver: Send + Sync + 'static {
    /// Called with the feature name and its resulting enabled state.
    fn feature_did_change(&self, name: &str, is_enabled: bool);
}

/// A weak, identity-compared reference to an observer.
///
/// Two handles are equal when they point at the same observer allocation,
/// regardless of the observer's value. The allocation stays reserved while
/// any handle to it exists, so identity is stable even after the observer
/// itself has been dropped.
#[derive(Clone)]
pub struct ObserverHandle(Weak<dyn FeatureObserver>);

impl ObserverHandle {
    /// Creates a handle to a type-erased observer.
    pub fn new(observer: &Arc<dyn FeatureObserver>) -> Self {
        Self(Arc::downgrade(observer))
    }

    /// Creates a handle to a concrete observer.
    pub fn from_arc<O: FeatureObserver>(observer: &Arc<O>) -> Self {
        let observer: Arc<dyn FeatureObserver> = observer.clone();
        Self::new(&observer)
    }

    /// Returns the observer if it is still alive.
    pub fn upgrade(&self) -> Option<Arc<dyn FeatureObserver>> {
        self.0.upgrade()
    }

    /// Whether the observer is still alive.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }

    fn addr(&self) -> *const () {
        self.0.as_ptr().cast::<()>()
    }
}

impl PartialEq for ObserverHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.addr(), other.addr())
    }
}

impl Eq for ObserverHandle {}

impl Hash for ObserverHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.addr(), state);
    }
}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("addr", &self.addr())
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Which features an observer is (un)subscribed from.
///
/// When adding, [`Subscription::All`] subscribes to every feature, including
/// ones registered later. When removing, it detaches the observer from every
/// subscription it holds, specific names included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    /// Every feature.
    All,
    /// The listed feature names only.
    Features(Vec<String>),
}

impl Subscription {
    /// Subscription to every feature.
    pub fn all() -> Self {
        Subscription::All
    }

    /// Subscription to a single feature.
    pub fn feature(name: impl Into<String>) -> Self {
        Subscription::Features(vec![name.into()])
    }

    /// Subscription to the given features.
    pub fn features<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Subscription::Features(names.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Subscription {
    fn from(name: &str) -> Self {
        Subscription::feature(name)
    }
}

impl From<String> for Subscription {
    fn from(name: String) -> Self {
        Subscription::feature(name)
    }
}

impl From<Vec<String>> for Subscription {
    fn from(names: Vec<String>) -> Self {
        Subscription::Features(names)
    }
}

impl From<&[&str]> for Subscription {
    fn from(names: &[&str]) -> Self {
        Subscription::features(names.iter().copied())
    }
}
