mod codes;

pub use codes::ExitCode;

use crate::pattern::PatternError;
use crate::plan::PlanError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Folder path cannot be empty")]
    EmptyFolderPath,

    #[error("Folder does not exist: {path}")]
    FolderNotFound { path: PathBuf },

    #[error("Path is not a folder: {path}")]
    NotAFolder { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Folder is not writable: {path}")]
    FolderNotWritable { path: PathBuf },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    #[error("No naming pattern given")]
    MissingPattern,

    #[error("No files found matching filter")]
    NoFilesMatched,

    #[error("Unsafe rename plan: {0}")]
    UnsafePlan(#[from] PlanError),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::EmptyFolderPath => ExitCode::FolderNotFound,
            AppError::FolderNotFound { .. } => ExitCode::FolderNotFound,
            AppError::NotAFolder { .. } => ExitCode::FolderNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::FolderNotWritable { .. } => ExitCode::PermissionError,
            AppError::InvalidPattern(_) => ExitCode::InvalidPattern,
            AppError::MissingPattern => ExitCode::InvalidArguments,
            AppError::NoFilesMatched => ExitCode::NoFilesMatched,
            AppError::UnsafePlan(_) => ExitCode::UnsafePlan,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::EmptyFolderPath => String::from(
                "No folder path was given.\n\n\
                 Provide the folder containing the files to rename.",
            ),

            AppError::FolderNotFound { path } => {
                format!(
                    "The specified folder does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotAFolder { path } => {
                format!(
                    "The specified path is not a folder:\n  {}\n\n\
                     Please provide a valid folder path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check folder permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::FolderNotWritable { path } => {
                format!(
                    "The folder is not writable:\n  {}\n\n\
                     Renaming requires write access to the folder.",
                    path.display()
                )
            }

            AppError::InvalidPattern(source) => {
                format!(
                    "The naming pattern is invalid:\n  {}\n\n\
                     Patterns use {{num}} for the counter, optionally zero-padded:\n\
                       file_{{num}}       -> file_1.txt, file_2.txt\n\
                       doc_{{num:03d}}    -> doc_001.txt, doc_002.txt\n\
                       photo_{{num}}_bak  -> photo_1_bak.jpg",
                    source
                )
            }

            AppError::MissingPattern => String::from(
                "No naming pattern was given.\n\n\
                 Pass one with --pattern, or set SEQRENAME_PATTERN in the \
                 environment or a .env file.",
            ),

            AppError::NoFilesMatched => String::from(
                "No files in the folder match the filter.\n\n\
                 Check the extension filter, or omit it to match all files.",
            ),

            AppError::UnsafePlan(source) => {
                format!(
                    "The rename plan is not safe to execute:\n  {}\n\n\
                     Nothing was renamed. Choose a different pattern or clean \
                     up the conflicting files first.",
                    source
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::EmptyPath => AppError::EmptyFolderPath,
            ScannerError::PathNotFound(path) => AppError::FolderNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotAFolder { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::NotWritable(path) => AppError::FolderNotWritable { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}
