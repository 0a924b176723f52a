//! Weak-reference observer pool.
//!
//! Observers are bucketed by feature name, plus one wildcard bucket for
//! observers of every feature. Buckets are sets keyed on observer identity,
//! created on first subscription and dropped once a removal empties them.

use std::collections::{HashMap, HashSet};
use toggler_core::{ChangeNotifier, FeatureProxy, ObserverHandle, Subscription};

/// Bucket key. The wildcard is its own variant so it can never collide with
/// a feature name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BucketKey {
    All,
    Feature(String),
}

/// The default [`ChangeNotifier`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use toggler_core::{ChangeNotifier, FeatureObserver, ObserverHandle, Subscription};
/// use toggler_std::ObserverPool;
///
/// struct Printer;
///
/// impl FeatureObserver for Printer {
///     fn feature_did_change(&self, name: &str, is_enabled: bool) {
///         println!("{name}: {is_enabled}");
///     }
/// }
///
/// let printer = Arc::new(Printer);
/// let mut pool = ObserverPool::new();
/// pool.add_observer(ObserverHandle::from_arc(&printer), &Subscription::feature("Credits"));
/// assert_eq!(pool.bucket_len("Credits"), 1);
/// ```
#[derive(Debug, Default)]
pub struct ObserverPool {
    buckets: HashMap<BucketKey, HashSet<ObserverHandle>>,
}

impl ObserverPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles subscribed to `name` specifically.
    pub fn bucket_len(&self, name: &str) -> usize {
        self.buckets
            .get(&BucketKey::Feature(name.to_owned()))
            .map_or(0, HashSet::len)
    }

    /// Number of handles subscribed to every feature.
    pub fn wildcard_len(&self) -> usize {
        self.buckets.get(&BucketKey::All).map_or(0, HashSet::len)
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no observer is subscribed at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Drops handles whose observer is gone, and any bucket left empty.
    ///
    /// Dead handles are harmless and skipped by [`notify`](ChangeNotifier::notify),
    /// so this is never done implicitly.
    ///
    /// Returns the number of handles removed.
    pub fn purge(&mut self) -> usize {
        let mut removed = 0;
        self.buckets.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(ObserverHandle::is_alive);
            removed += before - bucket.len();
            !bucket.is_empty()
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(removed, "Purged dead observers");

        removed
    }

    fn keys(subscription: &Subscription) -> Vec<BucketKey> {
        match subscription {
            Subscription::All => vec![BucketKey::All],
            Subscription::Features(names) => {
                names.iter().cloned().map(BucketKey::Feature).collect()
            }
        }
    }
}

impl ChangeNotifier for ObserverPool {
    fn add_observer(&mut self, observer: ObserverHandle, subscription: &Subscription) {
        for key in Self::keys(subscription) {
            self.buckets
                .entry(key)
                .or_default()
                .insert(observer.clone());
        }
    }

    fn remove_observer(&mut self, observer: &ObserverHandle, subscription: &Subscription) {
        match subscription {
            Subscription::All => {
                self.buckets.retain(|_, bucket| {
                    bucket.remove(observer);
                    !bucket.is_empty()
                });
            }
            Subscription::Features(_) => {
                for key in Self::keys(subscription) {
                    let Some(bucket) = self.buckets.get_mut(&key) else {
                        continue;
                    };
                    bucket.remove(observer);
                    if bucket.is_empty() {
                        self.buckets.remove(&key);
                    }
                }
            }
        }
    }

    fn notify(&self, name: &str, feature: &FeatureProxy) {
        let is_enabled = feature.is_enabled();
        let specific = self.buckets.get(&BucketKey::Feature(name.to_owned()));
        let wildcard = self.buckets.get(&BucketKey::All);

        let mut seen = HashSet::new();
        for handle in specific.into_iter().chain(wildcard).flatten() {
            if !seen.insert(handle) {
                continue;
            }
            match handle.upgrade() {
                Some(observer) => observer.feature_did_change(name, is_enabled),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(feature = name, "Skipping dropped observer");
                }
            }
        }
    }
}
