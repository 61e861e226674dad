//! # Cursor
//!
//! Materialized result stream handed to contracts by range and selector
//! queries. Every live cursor is counted so tests can assert that contracts
//! release them on all exit paths.

use shared_types::{KeyValue, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts a cursor as open until dropped.
#[derive(Debug)]
struct CursorGuard {
    open: Arc<AtomicUsize>,
}

impl CursorGuard {
    fn new(open: Arc<AtomicUsize>) -> Self {
        open.fetch_add(1, Ordering::SeqCst);
        Self { open }
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Result stream over a snapshot of matching entries.
#[derive(Debug)]
pub struct Cursor {
    items: std::vec::IntoIter<KeyValue>,
    yielded: usize,
    failure: Option<(usize, StoreError)>,
    exhausted: bool,
    _guard: CursorGuard,
}

impl Cursor {
    /// Cursor over `items`, registered in `open`.
    pub(crate) fn new(items: Vec<KeyValue>, open: Arc<AtomicUsize>) -> Self {
        Self {
            items: items.into_iter(),
            yielded: 0,
            failure: None,
            exhausted: false,
            _guard: CursorGuard::new(open),
        }
    }

    /// Make the cursor fail with `error` once `after` entries were yielded.
    #[must_use]
    pub(crate) fn failing_after(mut self, after: Option<usize>, error: StoreError) -> Self {
        self.failure = after.map(|n| (n, error));
        self
    }
}

impl Iterator for Cursor {
    type Item = Result<KeyValue, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if let Some((after, error)) = &self.failure {
            if self.yielded >= *after {
                self.exhausted = true;
                return Some(Err(error.clone()));
            }
        }
        match self.items.next() {
            Some(kv) => {
                self.yielded += 1;
                Some(Ok(kv))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
