mod types;

pub use types::{ExecutionReport, ItemOutcome, ItemReport, UndoError};

use crate::error::AppError;
use crate::history::{HistoryStore, OperationSummary, RenameOperation, ReverseEntry};
use crate::pattern::Pattern;
use crate::plan::{self, RenamePair};
use crate::scanner;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Batch rename engine. Owns the history store; the sole mutator of both the
/// filesystem and the history.
#[derive(Debug, Default)]
pub struct Renamer {
    history: HistoryStore,
}

impl Renamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the rename plan without touching the filesystem.
    ///
    /// Side-effect free: calling it repeatedly over an unchanged folder
    /// returns identical output.
    pub fn preview(
        &self,
        folder: &Path,
        pattern: &str,
        extension_filter: Option<&str>,
    ) -> Result<Vec<RenamePair>, AppError> {
        let pattern = Pattern::compile(pattern)?;
        let files = scanner::scan_folder(folder, extension_filter)?;

        if files.is_empty() {
            return Err(AppError::NoFilesMatched);
        }

        Ok(plan::build_plan(&files, &pattern))
    }

    /// Advisory whole-batch safety check: recomputes the plan and rejects it
    /// on any target collision. The interactive flow calls this before
    /// executing; `execute` still enforces no-overwrite per item on its own.
    pub fn validate_safe(
        &self,
        folder: &Path,
        pattern: &str,
        extension_filter: Option<&str>,
    ) -> Result<(), AppError> {
        let pairs = self.preview(folder, pattern, extension_filter)?;
        plan::validate_safe(folder, &pairs)?;
        Ok(())
    }

    /// Apply the rename plan to the filesystem.
    ///
    /// Validation errors surface before any mutation. After that, items are
    /// processed strictly in plan order and one failure never aborts the
    /// batch: an existing target or a failed rename is recorded and the loop
    /// moves on. A RenameOperation is appended to history regardless of the
    /// outcome mix, so a fully-failed run still leaves a (undo-inert) record.
    pub fn execute(
        &mut self,
        folder: &Path,
        pattern: &str,
        extension_filter: Option<&str>,
    ) -> Result<ExecutionReport, AppError> {
        let pairs = self.preview(folder, pattern, extension_filter)?;

        info!(folder = ?folder, pattern = %pattern, count = pairs.len(), "Executing rename batch");

        let mut report = ExecutionReport::default();
        let mut reverse_mapping = Vec::new();

        for pair in &pairs {
            let old_path = folder.join(&pair.old_name);
            let new_path = folder.join(&pair.new_name);

            // No overwrite, ever
            if new_path.exists() {
                warn!(target = %pair.new_name, "Target already exists, skipping");
                report.record_failure(
                    &pair.old_name,
                    &pair.new_name,
                    ItemOutcome::SkippedExists,
                    format!("Target file already exists: {}", pair.new_name),
                );
                continue;
            }

            match fs::rename(&old_path, &new_path) {
                Ok(()) => {
                    debug!(from = %pair.old_name, to = %pair.new_name, "Renamed");
                    report.record_renamed(&pair.old_name, &pair.new_name);
                    reverse_mapping.push(ReverseEntry {
                        new_name: pair.new_name.clone(),
                        old_name: pair.old_name.clone(),
                    });
                }
                Err(e) => {
                    warn!(from = %pair.old_name, error = %e, "Rename failed");
                    report.record_failure(
                        &pair.old_name,
                        &pair.new_name,
                        ItemOutcome::Failed,
                        format!("Failed to rename {}: {}", pair.old_name, e),
                    );
                }
            }
        }

        self.history.push(RenameOperation {
            folder: folder.to_path_buf(),
            pattern: pattern.to_string(),
            success_count: report.success_count,
            failure_count: report.failure_count,
            executed_at: Utc::now(),
            reverse_mapping,
        });

        info!(
            succeeded = report.success_count,
            failed = report.failure_count,
            "Batch complete"
        );

        Ok(report)
    }

    /// Reverse the most recent operation.
    ///
    /// The operation record is consumed once the undo is attempted, whatever
    /// the outcome; undo is one-shot per operation. Succeeds when at least
    /// one file was restored.
    pub fn undo(&mut self) -> Result<String, UndoError> {
        let operation = self.history.pop().ok_or(UndoError::EmptyHistory)?;

        if operation.reverse_mapping.is_empty() {
            return Err(UndoError::NoMapping);
        }

        info!(
            folder = ?operation.folder,
            count = operation.reverse_mapping.len(),
            "Undoing last rename operation"
        );

        let mut restored = 0usize;
        let mut failed = 0usize;
        let mut errors = Vec::new();

        for entry in &operation.reverse_mapping {
            let current_path = operation.folder.join(&entry.new_name);
            let original_path = operation.folder.join(&entry.old_name);

            if !current_path.exists() {
                warn!(name = %entry.new_name, "File not found during undo");
                failed += 1;
                errors.push(format!("File not found: {}", entry.new_name));
                continue;
            }

            match fs::rename(&current_path, &original_path) {
                Ok(()) => {
                    debug!(from = %entry.new_name, to = %entry.old_name, "Restored");
                    restored += 1;
                }
                Err(e) => {
                    warn!(name = %entry.new_name, error = %e, "Undo rename failed");
                    failed += 1;
                    errors.push(format!("Failed to undo rename {}: {}", entry.new_name, e));
                }
            }
        }

        if restored == 0 {
            Err(UndoError::NothingRestored(errors.join(", ")))
        } else if failed == 0 {
            Ok(format!(
                "Successfully undid rename operation. Restored {} files.",
                restored
            ))
        } else {
            Ok(format!(
                "Partially undone. Restored {} files, {} failed.",
                restored, failed
            ))
        }
    }

    /// Summaries of all recorded operations, oldest first.
    pub fn history(&self) -> Vec<OperationSummary> {
        self.history.summaries()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
