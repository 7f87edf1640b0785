pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod plan;
pub mod rename;
pub mod scanner;
pub mod ui;

pub use error::{AppError, ExitCode};
pub use history::{HistoryStore, OperationSummary, RenameOperation, ReverseEntry};
pub use pattern::{Pattern, PatternError};
pub use plan::{build_plan, validate_safe, PlanError, RenamePair};
pub use rename::{ExecutionReport, ItemOutcome, ItemReport, Renamer, UndoError};
pub use scanner::{scan_folder, ScannerError};
