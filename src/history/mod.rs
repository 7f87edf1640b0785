mod types;

pub use types::{OperationSummary, RenameOperation, ReverseEntry};

/// Process-lifetime, append-ordered record of executed rename operations.
///
/// Stack discipline: undo always consumes the most recent operation. The
/// store is in-memory only and resets on process start.
#[derive(Debug, Default)]
pub struct HistoryStore {
    operations: Vec<RenameOperation>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, operation: RenameOperation) {
        self.operations.push(operation);
    }

    /// Remove and return the most recent operation.
    pub fn pop(&mut self) -> Option<RenameOperation> {
        self.operations.pop()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Summaries of all recorded operations, oldest first.
    pub fn summaries(&self) -> Vec<OperationSummary> {
        self.operations.iter().map(RenameOperation::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn make_op(pattern: &str) -> RenameOperation {
        RenameOperation {
            folder: PathBuf::from("/test"),
            pattern: pattern.to_string(),
            success_count: 1,
            failure_count: 0,
            executed_at: Utc::now(),
            reverse_mapping: vec![],
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.summaries().is_empty());
    }

    #[test]
    fn test_pop_returns_most_recent() {
        let mut store = HistoryStore::new();
        store.push(make_op("first_{num}"));
        store.push(make_op("second_{num}"));

        let popped = store.pop().unwrap();
        assert_eq!(popped.pattern, "second_{num}");
        assert_eq!(store.len(), 1);

        let popped = store.pop().unwrap();
        assert_eq!(popped.pattern, "first_{num}");
        assert!(store.pop().is_none());
    }

    #[test]
    fn test_summaries_oldest_first() {
        let mut store = HistoryStore::new();
        store.push(make_op("a_{num}"));
        store.push(make_op("b_{num}"));

        let summaries = store.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].pattern, "a_{num}");
        assert_eq!(summaries[1].pattern, "b_{num}");
    }

    #[test]
    fn test_clear() {
        let mut store = HistoryStore::new();
        store.push(make_op("a_{num}"));
        store.push(make_op("b_{num}"));

        store.clear();

        assert!(store.is_empty());
        assert!(store.pop().is_none());
    }
}
