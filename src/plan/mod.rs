mod types;

pub use types::RenamePair;

use crate::pattern::Pattern;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Pattern would create duplicate target name: {0}")]
    DuplicateTarget(String),

    #[error("Target filename already exists: {0}")]
    TargetExists(String),

    #[error("Failed to read folder: {0}")]
    IoError(#[from] std::io::Error),
}

/// Build the ordered rename plan: counters assigned 1..N in scan order, each
/// file keeping the extension after its last dot.
pub fn build_plan(files: &[String], pattern: &Pattern) -> Vec<RenamePair> {
    let mut pairs = Vec::with_capacity(files.len());

    for (counter, old_name) in files.iter().enumerate() {
        let new_name = format!("{}{}", pattern.render(counter + 1), extension_of(old_name));

        trace!(old = %old_name, new = %new_name, "Planned rename");

        pairs.push(RenamePair::new(old_name.clone(), new_name));
    }

    debug!(count = pairs.len(), "Plan built");

    pairs
}

/// Advisory safety check for a plan, before execution.
///
/// Rejects a plan whose target names collide with each other, or with an
/// existing directory entry that is not itself being renamed in this plan.
/// The executor still enforces no-overwrite per item; this check lets the
/// caller refuse the whole batch up front.
pub fn validate_safe(folder: &Path, plan: &[RenamePair]) -> Result<(), PlanError> {
    let mut targets = HashSet::new();
    for pair in plan {
        if !targets.insert(pair.new_name.as_str()) {
            return Err(PlanError::DuplicateTarget(pair.new_name.clone()));
        }
    }

    let sources: HashSet<&str> = plan.iter().map(|p| p.old_name.as_str()).collect();

    let mut existing = HashSet::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        existing.insert(entry.file_name().to_string_lossy().to_string());
    }

    for pair in plan {
        if existing.contains(&pair.new_name) && !sources.contains(pair.new_name.as_str()) {
            return Err(PlanError::TargetExists(pair.new_name.clone()));
        }
    }

    debug!(count = plan.len(), "Plan validated as safe");

    Ok(())
}

/// Extension including the leading dot, split at the last dot.
///
/// Follows std::path semantics: "archive.tar.gz" keeps ".gz", "README" keeps
/// nothing, and a leading-dot name like ".gitignore" has no extension.
fn extension_of(name: &str) -> String {
    match Path::new(name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}
