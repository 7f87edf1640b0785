use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Folder path cannot be empty")]
    EmptyPath,

    #[error("Folder does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a folder: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Folder is not writable: {0}")]
    NotWritable(PathBuf),

    #[error("Failed to read folder: {0}")]
    IoError(#[from] std::io::Error),
}

/// List the regular files directly inside `folder`, sorted lexicographically.
///
/// `extension_filter` is a case-insensitive suffix such as ".txt". Renaming
/// needs write access, so a read-only folder is rejected up front. Any read
/// error fails the whole scan; a partial listing would silently skip files
/// during rename.
pub fn scan_folder(
    folder: &Path,
    extension_filter: Option<&str>,
) -> Result<Vec<String>, ScannerError> {
    debug!(path = ?folder, filter = ?extension_filter, "Scanning folder");

    if folder.as_os_str().is_empty() {
        return Err(ScannerError::EmptyPath);
    }

    if !folder.exists() {
        return Err(ScannerError::PathNotFound(folder.to_path_buf()));
    }

    if !folder.is_dir() {
        return Err(ScannerError::NotADirectory(folder.to_path_buf()));
    }

    let metadata = fs::metadata(folder)?;
    if metadata.permissions().readonly() {
        return Err(ScannerError::NotWritable(folder.to_path_buf()));
    }

    let read_dir = fs::read_dir(folder).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(folder.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let filter_lower = extension_filter.map(str::to_lowercase);
    let mut files = Vec::new();

    for entry in read_dir {
        let entry = entry?;

        trace!(entry = ?entry.path(), "Examining entry");

        if !entry.file_type()?.is_file() {
            trace!(entry = ?entry.path(), "Skipping non-file entry");
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();

        if let Some(suffix) = &filter_lower {
            if !name.to_lowercase().ends_with(suffix) {
                trace!(name = %name, "Filtered out by extension");
                continue;
            }
        }

        files.push(name);
    }

    files.sort();

    debug!(count = files.len(), "Scan complete");

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_folder() {
        let dir = tempdir().unwrap();
        let result = scan_folder(dir.path(), None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_lists_only_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("b.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let result = scan_folder(dir.path(), None).unwrap();

        assert_eq!(result, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_scan_includes_hidden_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "x").unwrap();
        fs::write(dir.path().join("visible.txt"), "x").unwrap();

        let result = scan_folder(dir.path(), None).unwrap();

        assert_eq!(result, vec![".gitignore", "visible.txt"]);
    }

    #[test]
    fn test_extension_filter() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "x").unwrap();
        fs::write(dir.path().join("skip.jpg"), "x").unwrap();

        let result = scan_folder(dir.path(), Some(".txt")).unwrap();

        assert_eq!(result, vec!["keep.txt"]);
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("upper.TXT"), "x").unwrap();
        fs::write(dir.path().join("lower.txt"), "x").unwrap();
        fs::write(dir.path().join("other.jpg"), "x").unwrap();

        let result = scan_folder(dir.path(), Some(".txt")).unwrap();

        assert_eq!(result, vec!["lower.txt", "upper.TXT"]);
    }

    #[test]
    fn test_lexicographic_sorting() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("zebra.txt"), "x").unwrap();
        fs::write(dir.path().join("alpha.txt"), "x").unwrap();
        fs::write(dir.path().join("beta.txt"), "x").unwrap();

        let result = scan_folder(dir.path(), None).unwrap();

        assert_eq!(result, vec!["alpha.txt", "beta.txt", "zebra.txt"]);
    }

    #[test]
    fn test_empty_path() {
        let result = scan_folder(Path::new(""), None);
        assert!(matches!(result, Err(ScannerError::EmptyPath)));
    }

    #[test]
    fn test_path_not_found() {
        let result = scan_folder(Path::new("/nonexistent/path"), None);
        assert!(matches!(result, Err(ScannerError::PathNotFound(_))));
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("file.txt");
        fs::write(&file_path, "x").unwrap();

        let result = scan_folder(&file_path, None);
        assert!(matches!(result, Err(ScannerError::NotADirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_readonly_folder_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("frozen");
        fs::create_dir(&target).unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o555)).unwrap();

        let result = scan_folder(&target, None);
        assert!(matches!(result, Err(ScannerError::NotWritable(_))));

        fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
