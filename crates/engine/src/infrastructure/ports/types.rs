//! Result shapes reported by the document store for write operations.

/// Outcome of an update-by-id.
///
/// A missing document is not an error: the store acknowledges the write and
/// reports zero matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateOutcome {
    pub fn matched(&self) -> bool {
        self.acknowledged && self.matched_count > 0
    }
}

/// Outcome of a delete-by-id. `deleted_count` is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn deleted(&self) -> bool {
        self.deleted_count > 0
    }
}
