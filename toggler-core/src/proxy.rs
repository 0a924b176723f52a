//! # Feature Proxy
//!
//! Wraps one feature and owns its enable/disable policy together with the
//! live enabled flag. The feature's own [`FeatureBase`](crate::FeatureBase)
//! flag is read once, when the proxy is created.
//!
//! | current  | write   | effect                                              |
//! |----------|---------|-----------------------------------------------------|
//! | disabled | `true`  | flag set; `activate` if `should_run_on_enable`      |
//! | enabled  | `false` | flag cleared; `deactivate` always                   |
//! | same     | same    | nothing                                             |

use crate::feature::{DynFeature, Feature};
use std::fmt;

/// Owner of a feature's enabled flag and transition policy.
pub struct FeatureProxy {
    feature: Box<dyn DynFeature>,
    is_enabled: bool,
    should_run_on_enable: bool,
}

impl FeatureProxy {
    /// Wraps `feature`, taking ownership of it.
    pub fn new<F: Feature>(feature: F, should_run_on_enable: bool) -> Self {
        let feature: Box<dyn DynFeature> = Box::new(feature);
        Self {
            is_enabled: feature.initially_enabled_dyn(),
            feature,
            should_run_on_enable,
        }
    }

    /// Whether the wrapped feature is enabled.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Writes the enabled flag, firing the lifecycle hook the transition
    /// calls for.
    ///
    /// Returns `true` if the flag actually changed.
    pub fn set_enabled(&mut self, is_enabled: bool) -> bool {
        if self.is_enabled == is_enabled {
            return false;
        }

        self.is_enabled = is_enabled;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            feature = self.feature_type(),
            is_enabled,
            run_on_enable = self.should_run_on_enable,
            "Feature transition"
        );

        if is_enabled {
            if self.should_run_on_enable {
                self.feature.activate_dyn();
            }
        } else {
            self.feature.deactivate_dyn();
        }
        true
    }

    /// Runs the feature if it is enabled.
    ///
    /// Returns `false` without touching the feature when it is disabled.
    pub fn run(&mut self) -> bool {
        if !self.is_enabled {
            return false;
        }
        self.feature.activate_dyn();
        true
    }

    /// Whether enabling the feature runs it straight away.
    pub fn should_run_on_enable(&self) -> bool {
        self.should_run_on_enable
    }

    /// Changes the run-on-enable policy for future enable transitions.
    pub fn set_should_run_on_enable(&mut self, should_run_on_enable: bool) {
        self.should_run_on_enable = should_run_on_enable;
    }

    /// Type name of the wrapped feature, for diagnostics.
    pub fn feature_type(&self) -> &'static str {
        self.feature.type_name_dyn()
    }
}

impl fmt::Debug for FeatureProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureProxy")
            .field("feature", &self.feature_type())
            .field("is_enabled", &self.is_enabled)
            .field("should_run_on_enable", &self.should_run_on_enable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{FeatureBase, FeatureState};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Clone, Default)]
    struct Calls {
        activate: Arc<AtomicUsize>,
        deactivate: Arc<AtomicUsize>,
    }

    impl Calls {
        fn activated(&self) -> usize {
            self.activate.load(Ordering::SeqCst)
        }

        fn deactivated(&self) -> usize {
            self.deactivate.load(Ordering::SeqCst)
        }
    }

    struct StubFeature {
        base: FeatureBase<()>,
        calls: Calls,
    }

    impl FeatureState for StubFeature {
        type Payload = ();

        fn state(&self) -> &FeatureBase<()> {
            &self.base
        }

        fn state_mut(&mut self) -> &mut FeatureBase<()> {
            &mut self.base
        }
    }

    impl Feature for StubFeature {
        fn activate(&mut self) {
            self.calls.activate.fetch_add(1, Ordering::SeqCst);
        }

        fn deactivate(&mut self) {
            self.calls.deactivate.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn proxy(is_enabled: bool, run_on_enable: bool) -> (FeatureProxy, Calls) {
        let calls = Calls::default();
        let feature = StubFeature {
            base: FeatureBase::with_enabled((), is_enabled),
            calls: calls.clone(),
        };
        (FeatureProxy::new(feature, run_on_enable), calls)
    }

    #[test]
    fn test_reads_initial_flag() {
        assert!(!proxy(false, false).0.is_enabled());
        assert!(proxy(true, false).0.is_enabled());
    }

    #[test]
    fn test_enable_without_run_on_enable_does_not_activate() {
        let (mut proxy, calls) = proxy(false, false);
        assert!(proxy.set_enabled(true));
        assert!(proxy.is_enabled());
        assert_eq!(calls.activated(), 0);
        assert_eq!(calls.deactivated(), 0);
    }

    #[test]
    fn test_enable_with_run_on_enable_activates() {
        let (mut proxy, calls) = proxy(false, true);
        proxy.set_enabled(true);
        assert_eq!(calls.activated(), 1);
    }

    #[test]
    fn test_enable_when_already_enabled_is_noop() {
        let (mut proxy, calls) = proxy(true, true);
        assert!(!proxy.set_enabled(true));
        assert_eq!(calls.activated(), 0);
    }

    #[test]
    fn test_disable_always_deactivates() {
        for run_on_enable in [false, true] {
            let (mut proxy, calls) = proxy(true, run_on_enable);
            assert!(proxy.set_enabled(false));
            assert!(!proxy.is_enabled());
            assert_eq!(calls.deactivated(), 1);
            assert_eq!(calls.activated(), 0);
        }
    }

    #[test]
    fn test_disable_when_already_disabled_is_noop() {
        let (mut proxy, calls) = proxy(false, false);
        assert!(!proxy.set_enabled(false));
        assert_eq!(calls.deactivated(), 0);
    }

    #[test]
    fn test_run_disabled_returns_false() {
        let (mut proxy, calls) = proxy(false, false);
        assert!(!proxy.run());
        assert_eq!(calls.activated(), 0);
    }

    #[test]
    fn test_run_enabled_activates_every_time() {
        let (mut proxy, calls) = proxy(true, false);
        assert!(proxy.run());
        assert!(proxy.run());
        assert_eq!(calls.activated(), 2);
    }

    #[test]
    fn test_policy_change_is_not_retroactive() {
        let (mut proxy, calls) = proxy(false, false);
        proxy.set_enabled(true);
        proxy.set_should_run_on_enable(true);
        assert!(proxy.should_run_on_enable());
        assert_eq!(calls.activated(), 0);

        proxy.set_enabled(false);
        proxy.set_enabled(true);
        assert_eq!(calls.activated(), 1);
    }

    /// Replaces its whole base from inside the hooks, flag included.
    struct Rewriting {
        base: FeatureBase<()>,
    }

    impl FeatureState for Rewriting {
        type Payload = ();

        fn state(&self) -> &FeatureBase<()> {
            &self.base
        }

        fn state_mut(&mut self) -> &mut FeatureBase<()> {
            &mut self.base
        }
    }

    impl Feature for Rewriting {
        fn activate(&mut self) {
            *self.state_mut() = FeatureBase::with_enabled((), false);
        }

        fn deactivate(&mut self) {
            *self.state_mut() = FeatureBase::with_enabled((), true);
        }
    }

    #[test]
    fn test_hooks_cannot_rewrite_enabled_flag() {
        let mut proxy = FeatureProxy::new(
            Rewriting {
                base: FeatureBase::new(()),
            },
            true,
        );

        assert!(proxy.set_enabled(true));
        assert!(proxy.is_enabled());
        assert!(proxy.run());
        assert!(proxy.is_enabled());

        assert!(proxy.set_enabled(false));
        assert!(!proxy.is_enabled());
        assert!(!proxy.run());
    }

    #[test]
    fn test_debug_names_feature_type() {
        let (proxy, _) = proxy(false, true);
        let debug = format!("{proxy:?}");
        assert!(debug.contains("StubFeature"));
        assert!(debug.contains("should_run_on_enable: true"));
    }
}
