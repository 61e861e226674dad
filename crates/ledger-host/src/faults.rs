//! # Fault Injection
//!
//! Lets tests make the record store fail in the ways a real ledger adapter
//! can: point reads, writes, opening a cursor and failing mid-iteration.

use std::collections::HashSet;

/// Failures the host injects into record store calls.
#[derive(Debug, Clone, Default)]
pub struct FaultPlan {
    /// Keys whose reads fail.
    pub read_failures: HashSet<String>,
    /// Keys whose writes fail.
    pub write_failures: HashSet<String>,
    /// Opening a range scan fails.
    pub range_open: bool,
    /// Range cursors fail after yielding this many entries.
    pub range_fail_after: Option<usize>,
    /// Opening a selector query fails.
    pub query_open: bool,
    /// Selector cursors fail after yielding this many entries.
    pub query_fail_after: Option<usize>,
}

impl FaultPlan {
    /// Returns true if nothing is injected.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.read_failures.is_empty()
            && self.write_failures.is_empty()
            && !self.range_open
            && self.range_fail_after.is_none()
            && !self.query_open
            && self.query_fail_after.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_clear() {
        let mut plan = FaultPlan::default();
        assert!(plan.is_clear());
        plan.range_fail_after = Some(0);
        assert!(!plan.is_clear());
    }
}
