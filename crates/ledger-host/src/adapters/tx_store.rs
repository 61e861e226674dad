//! # Transaction Store
//!
//! `RecordStore` for one namespace inside one transaction. Reads see the
//! transaction's own pending writes layered over committed state; writes stay
//! in the sandbox until the host commits.

use crate::adapters::cursor::Cursor;
use crate::state::{Namespace, WorldState, WriteSet};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use shared_types::{BoxedStateIterator, KeyValue, RecordStore, Selector, StoreError};
use std::ops::Bound;
use tracing::trace;

/// Record store bound to a namespace and a write sandbox.
pub struct TxStore<'a> {
    namespace: String,
    state: &'a WorldState,
    writes: &'a Mutex<WriteSet>,
}

impl<'a> TxStore<'a> {
    /// Create a store for `namespace`.
    pub fn new(namespace: impl Into<String>, state: &'a WorldState, writes: &'a Mutex<WriteSet>) -> Self {
        Self {
            namespace: namespace.into(),
            state,
            writes,
        }
    }

    /// Committed entries with this transaction's writes layered on top.
    fn merged_view(&self) -> Namespace {
        let mut view = self.state.snapshot(&self.namespace);
        for ((namespace, key), value) in self.writes.lock().iter() {
            if namespace == &self.namespace {
                view.insert(key.clone(), value.clone());
            }
        }
        view
    }
}

#[async_trait]
impl RecordStore for TxStore<'_> {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.state.faults().read_failures.contains(key) {
            return Err(StoreError::Read {
                key: key.to_string(),
                reason: "injected read failure".to_string(),
            });
        }

        let pending = self
            .writes
            .lock()
            .get(&(self.namespace.clone(), key.to_string()))
            .cloned();
        Ok(pending.or_else(|| self.state.get(&self.namespace, key)))
    }

    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if self.state.faults().write_failures.contains(key) {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "injected write failure".to_string(),
            });
        }

        trace!(namespace = %self.namespace, key, bytes = value.len(), "Buffered write");
        self.writes
            .lock()
            .insert((self.namespace.clone(), key.to_string()), value);
        Ok(())
    }

    async fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<BoxedStateIterator, StoreError> {
        let faults = self.state.faults();
        let scan_error = |reason: &str| StoreError::Scan {
            start: start.to_string(),
            end: end.to_string(),
            reason: reason.to_string(),
        };
        if faults.range_open {
            return Err(scan_error("injected failure opening range"));
        }

        let items: Vec<KeyValue> = if start > end {
            Vec::new()
        } else {
            self.merged_view()
                .range::<str, _>((Bound::Included(start), Bound::Excluded(end)))
                .map(|(key, value)| KeyValue {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect()
        };

        let cursor = Cursor::new(items, self.state.cursor_counter()).failing_after(
            faults.range_fail_after,
            scan_error("injected failure during iteration"),
        );
        Ok(Box::new(cursor))
    }

    async fn get_query_result(
        &self,
        selector: &Selector,
    ) -> Result<BoxedStateIterator, StoreError> {
        let faults = self.state.faults();
        if faults.query_open {
            return Err(StoreError::Query(format!(
                "injected failure running {}",
                selector.to_query_string()
            )));
        }

        let items: Vec<KeyValue> = self
            .merged_view()
            .into_iter()
            .filter(|(_, value)| {
                serde_json::from_slice::<Value>(value).is_ok_and(|doc| selector.matches(&doc))
            })
            .map(|(key, value)| KeyValue { key, value })
            .collect();

        let cursor = Cursor::new(items, self.state.cursor_counter()).failing_after(
            faults.query_fail_after,
            StoreError::Query("injected failure during iteration".to_string()),
        );
        Ok(Box::new(cursor))
    }
}
