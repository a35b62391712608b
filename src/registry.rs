// vim: tw=80
//! The identity-keyed store of every setup configured on one substitute.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use crate::{expectation::Expectation, invocation::Invocation};

/// Owns the mapping from canonical identity to expectation.
///
/// Scans run in ascending identity order, stable within one registry
/// instance.  When setups with different identities both match a call, the
/// first in that order wins; there is no specificity ranking.
#[derive(Default)]
pub struct Registry {
    setups: Mutex<BTreeMap<String, Arc<dyn Expectation>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `setup`, replacing any earlier entry with the same identity.
    /// The most recently configured setup for a given call shape wins.
    pub fn add(&self, setup: Arc<dyn Expectation>) {
        self.setups.lock().unwrap()
            .insert(setup.identity().to_owned(), setup);
    }

    /// The first setup, in ascending identity order, whose matcher accepts
    /// `call`.
    ///
    /// The lock is held only to snapshot the map, never across a matcher.
    pub fn find_first_match(&self, call: &dyn Invocation)
        -> Option<Arc<dyn Expectation>>
    {
        self.all().into_iter().find(|s| s.matches(call))
    }

    /// Every setup, in ascending identity order.
    pub fn all(&self) -> Vec<Arc<dyn Expectation>> {
        self.setups.lock().unwrap().values().cloned().collect()
    }
}
