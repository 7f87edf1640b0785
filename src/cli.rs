use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seqrename")]
#[command(author, version, about, long_about = None)]
#[command(about = "Batch-rename files in a folder using a sequential numbering pattern")]
pub struct Args {
    /// Folder containing the files to rename (omit for interactive mode)
    pub folder: Option<PathBuf>,

    /// Naming pattern with a {num} counter, e.g. "file_{num}" or "doc_{num:03d}"
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Only rename files with this extension (e.g. "txt"); all files when omitted
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Show the rename plan without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Print the rename plan as JSON and exit without renaming
    #[arg(long)]
    pub json: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Normalize a user-supplied extension filter into the ".ext" suffix the
/// scanner matches on. "*" and blank input mean "match all files"; a leading
/// dot is optional.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_start_matches('.');

    if trimmed.is_empty() || trimmed == "*" {
        return None;
    }

    Some(format!(".{}", trimmed.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_extension() {
        assert_eq!(normalize_extension("txt"), Some(".txt".to_string()));
    }

    #[test]
    fn test_normalize_strips_leading_dot() {
        assert_eq!(normalize_extension(".txt"), Some(".txt".to_string()));
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_extension("TXT"), Some(".txt".to_string()));
    }

    #[test]
    fn test_star_matches_all() {
        assert_eq!(normalize_extension("*"), None);
    }

    #[test]
    fn test_blank_matches_all() {
        assert_eq!(normalize_extension(""), None);
        assert_eq!(normalize_extension("   "), None);
        assert_eq!(normalize_extension("."), None);
    }
}
