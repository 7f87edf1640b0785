use thiserror::Error;

/// Terminal state of a single planned rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// File was renamed to its planned target
    Renamed,
    /// Target name already existed on disk; source left untouched
    SkippedExists,
    /// The rename call failed
    Failed,
}

/// Per-item record of what happened during execution.
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub old_name: String,
    pub new_name: String,
    pub outcome: ItemOutcome,
}

/// Result of one batch execution. One failure never aborts the batch, so a
/// report can mix successes and failures freely.
#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    pub success_count: usize,
    pub failure_count: usize,
    pub errors: Vec<String>,
    pub items: Vec<ItemReport>,
}

impl ExecutionReport {
    pub(crate) fn record_renamed(&mut self, old_name: &str, new_name: &str) {
        self.success_count += 1;
        self.items.push(ItemReport {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            outcome: ItemOutcome::Renamed,
        });
    }

    pub(crate) fn record_failure(
        &mut self,
        old_name: &str,
        new_name: &str,
        outcome: ItemOutcome,
        message: String,
    ) {
        self.failure_count += 1;
        self.errors.push(message);
        self.items.push(ItemReport {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            outcome,
        });
    }

    pub fn is_full_success(&self) -> bool {
        self.failure_count == 0
    }
}

#[derive(Error, Debug)]
pub enum UndoError {
    #[error("No rename operations in history")]
    EmptyHistory,

    #[error("No rename mapping available for undo")]
    NoMapping,

    #[error("Failed to undo rename operation. Errors: {0}")]
    NothingRestored(String),
}
