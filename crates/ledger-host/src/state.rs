//! # World State
//!
//! Committed key-value state, partitioned by contract namespace. Each
//! contract only sees its own namespace; nested invocations switch namespace
//! but share the caller's write sandbox.

use crate::faults::FaultPlan;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Ordered key space of one namespace.
pub type Namespace = BTreeMap<String, Vec<u8>>;

/// Pending writes of one transaction, keyed by `(namespace, key)`.
pub type WriteSet = BTreeMap<(String, String), Vec<u8>>;

/// Committed state shared by every transaction.
#[derive(Debug, Default)]
pub struct WorldState {
    namespaces: RwLock<HashMap<String, Namespace>>,
    open_cursors: Arc<AtomicUsize>,
    faults: Mutex<FaultPlan>,
}

impl WorldState {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed value under `key`.
    #[must_use]
    pub fn get(&self, namespace: &str, key: &str) -> Option<Vec<u8>> {
        self.namespaces
            .read()
            .get(namespace)
            .and_then(|ns| ns.get(key))
            .cloned()
    }

    /// Write directly to committed state, bypassing any transaction.
    pub fn put(&self, namespace: &str, key: &str, value: Vec<u8>) {
        self.namespaces
            .write()
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Copy of a namespace's committed entries.
    #[must_use]
    pub fn snapshot(&self, namespace: &str) -> Namespace {
        self.namespaces
            .read()
            .get(namespace)
            .cloned()
            .unwrap_or_default()
    }

    /// Commit a transaction's writes.
    pub fn apply(&self, writes: WriteSet) {
        let mut namespaces = self.namespaces.write();
        for ((namespace, key), value) in writes {
            namespaces.entry(namespace).or_default().insert(key, value);
        }
    }

    /// Number of committed keys in a namespace.
    #[must_use]
    pub fn key_count(&self, namespace: &str) -> usize {
        self.namespaces.read().get(namespace).map_or(0, BTreeMap::len)
    }

    /// Shared counter of live cursors.
    pub(crate) fn cursor_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.open_cursors)
    }

    /// Number of cursors handed out and not yet dropped.
    #[must_use]
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Copy of the current fault plan.
    #[must_use]
    pub fn faults(&self) -> FaultPlan {
        self.faults.lock().clone()
    }

    /// Change the fault plan.
    pub fn update_faults(&self, update: impl FnOnce(&mut FaultPlan)) {
        update(&mut *self.faults.lock());
    }
}
