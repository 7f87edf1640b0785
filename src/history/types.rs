use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// One restorable rename captured during execution, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct ReverseEntry {
    /// Name the file carries after the rename
    pub new_name: String,

    /// Name to restore on undo
    pub old_name: String,
}

/// Record of one executed batch rename. Immutable once stored; consumed and
/// discarded by undo.
#[derive(Debug, Clone, Serialize)]
pub struct RenameOperation {
    /// Folder the batch ran in
    pub folder: PathBuf,

    /// Pattern string the targets were computed from
    pub pattern: String,

    /// Files successfully renamed
    pub success_count: usize,

    /// Files skipped or failed
    pub failure_count: usize,

    /// When the batch was executed
    pub executed_at: DateTime<Utc>,

    /// new-name -> old-name table for every successful rename.
    /// Empty for a fully-failed run, in which case the record is inert
    /// for undo purposes.
    pub reverse_mapping: Vec<ReverseEntry>,
}

/// Projection of a RenameOperation for history listings.
#[derive(Debug, Clone, Serialize)]
pub struct OperationSummary {
    pub folder: PathBuf,
    pub pattern: String,
    pub success_count: usize,
    pub executed_at: DateTime<Utc>,
}

impl RenameOperation {
    pub fn summary(&self) -> OperationSummary {
        OperationSummary {
            folder: self.folder.clone(),
            pattern: self.pattern.clone(),
            success_count: self.success_count,
            executed_at: self.executed_at,
        }
    }
}
