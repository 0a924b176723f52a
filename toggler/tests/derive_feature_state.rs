#![cfg(feature = "macros")]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use toggler::{Feature, FeatureBase, FeatureRegistry, FeatureState};

// ============================================================================
// Test: derive(FeatureState) on a FeatureBase field
// ============================================================================

#[derive(FeatureState)]
struct Onboarding {
    shown: Arc<AtomicUsize>,
    base: FeatureBase<&'static str>,
}

impl Feature for Onboarding {
    fn activate(&mut self) {
        self.shown.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_derive_finds_base_field() {
    let feature = Onboarding {
        shown: Arc::default(),
        base: FeatureBase::with_enabled("welcome", true),
    };

    assert!(feature.state().initially_enabled());
    assert_eq!(*FeatureState::payload(&feature), "welcome");
}

// ============================================================================
// Test: derive(FeatureState) with an explicit marker
// ============================================================================

type Base = FeatureBase<u8>;

#[derive(FeatureState)]
struct Marked(u8, #[feature_state] FeatureBase<u8>, Base);

impl Feature for Marked {
    fn activate(&mut self) {
        self.0 += 1;
    }
}

#[test]
fn test_derive_uses_marked_field() {
    let mut feature = Marked(0, FeatureBase::new(1), FeatureBase::with_enabled(2, true));

    assert_eq!(*feature.state().payload(), 1);
    assert!(!feature.state().initially_enabled());

    *feature.state_mut().payload_mut() = 9;
    assert_eq!(*feature.2.payload(), 2);
    assert_eq!(*feature.1.payload(), 9);
}

#[test]
fn test_derived_feature_in_registry() {
    let shown = Arc::new(AtomicUsize::new(0));
    let mut registry = FeatureRegistry::new();
    registry.add_with(
        "Onboarding",
        Onboarding {
            shown: shown.clone(),
            base: FeatureBase::new("welcome"),
        },
        true,
    );

    registry.set_enabled("Onboarding", true).unwrap();
    assert_eq!(shown.load(Ordering::SeqCst), 1);
    assert!(registry.is_enabled("Onboarding").unwrap());

    assert!(registry.run("Onboarding").unwrap());
    assert_eq!(shown.load(Ordering::SeqCst), 2);

    registry.set_enabled("Onboarding", false).unwrap();
    assert!(!registry.run("Onboarding").unwrap());
    assert_eq!(shown.load(Ordering::SeqCst), 2);
}
