#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use toggler::{Feature, FeatureBase, FeatureObserver, FeatureState};

// ============================================================================
// Test Features
// ============================================================================

/// Payload shared between a test and the feature it registered.
#[derive(Clone, Default)]
pub struct Journal(pub Arc<Mutex<Vec<&'static str>>>);

impl Journal {
    pub fn entries(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, entry: &'static str) {
        self.0.lock().unwrap().push(entry);
    }
}

/// A feature in the shape applications write them: own struct, embedded base.
pub struct CreditsFeature {
    pub base: FeatureBase<Journal>,
}

impl CreditsFeature {
    pub fn new(journal: Journal) -> Self {
        Self {
            base: FeatureBase::new(journal),
        }
    }

    pub fn enabled(journal: Journal) -> Self {
        Self {
            base: FeatureBase::with_enabled(journal, true),
        }
    }
}

impl FeatureState for CreditsFeature {
    type Payload = Journal;

    fn state(&self) -> &FeatureBase<Journal> {
        &self.base
    }

    fn state_mut(&mut self) -> &mut FeatureBase<Journal> {
        &mut self.base
    }
}

impl Feature for CreditsFeature {
    fn activate(&mut self) {
        self.base.payload().push("present");
    }

    fn deactivate(&mut self) {
        self.base.payload().push("dismiss");
    }
}

// ============================================================================
// Test Observers
// ============================================================================

/// Observer that records changes into a shared, ordered log with its id.
pub struct TaggedObserver {
    pub id: usize,
    pub log: Arc<Mutex<Vec<(usize, String, bool)>>>,
}

impl FeatureObserver for TaggedObserver {
    fn feature_did_change(&self, name: &str, is_enabled: bool) {
        self.log
            .lock()
            .unwrap()
            .push((self.id, name.to_string(), is_enabled));
    }
}
