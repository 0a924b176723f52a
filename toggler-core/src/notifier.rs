//! Change notification seam.
//!
//! The registry talks to observers only through a [`ChangeNotifier`], so an
//! alternative pool (or a test spy) can be injected in place of the default
//! weak-reference pool from `toggler-std`.

use crate::{
    observer::{ObserverHandle, Subscription},
    proxy::FeatureProxy,
};

/// Keeps observer subscriptions and fans changes out to them.
pub trait ChangeNotifier: Send {
    /// Subscribes `observer`. Adding the same observer twice to the same
    /// subscription has no further effect.
    fn add_observer(&mut self, observer: ObserverHandle, subscription: &Subscription);

    /// Unsubscribes `observer`. [`Subscription::All`] removes it everywhere.
    fn remove_observer(&mut self, observer: &ObserverHandle, subscription: &Subscription);

    /// Tells every live observer of `name` the feature's current state.
    fn notify(&self, name: &str, feature: &FeatureProxy);
}
