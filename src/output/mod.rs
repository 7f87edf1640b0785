use crate::history::OperationSummary;
use crate::plan::RenamePair;
use crate::rename::ExecutionReport;
use std::io::{self, Write};

/// Display the rename plan before anything is executed
pub fn display_preview(pairs: &[RenamePair], writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "========================================")?;
    writeln!(writer, "            RENAME PREVIEW")?;
    writeln!(writer, "========================================")?;
    writeln!(writer)?;

    for (i, pair) in pairs.iter().enumerate() {
        writeln!(writer, "  {}. {}", i + 1, pair.old_name)?;
        writeln!(writer, "     -> {}", pair.new_name)?;
    }

    writeln!(writer)?;
    writeln!(writer, "----------------------------------------")?;
    writeln!(writer, "{} files would be renamed.", pairs.len())?;

    Ok(())
}

/// Display the rename plan as JSON for scripting
pub fn display_preview_json(pairs: &[RenamePair], writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, pairs)?;
    writeln!(writer)?;
    Ok(())
}

/// Display the outcome of an executed batch
pub fn display_execution_report(
    report: &ExecutionReport,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Renamed {} files, {} failed.",
        report.success_count, report.failure_count
    )?;

    if !report.errors.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Errors:")?;
        for error in &report.errors {
            writeln!(writer, "  - {}", error)?;
        }
    }

    Ok(())
}

/// Display the recorded operation history, oldest first
pub fn display_history(
    summaries: &[OperationSummary],
    writer: &mut impl Write,
) -> io::Result<()> {
    if summaries.is_empty() {
        writeln!(writer, "No rename operations recorded.")?;
        return Ok(());
    }

    writeln!(writer)?;
    writeln!(writer, "RENAME HISTORY")?;
    writeln!(writer, "----------------------------------------")?;

    for (i, summary) in summaries.iter().enumerate() {
        writeln!(
            writer,
            "  {}. [{}] {}",
            i + 1,
            summary.executed_at.format("%Y-%m-%d %H:%M:%S"),
            summary.folder.display()
        )?;
        writeln!(
            writer,
            "     pattern: {}  renamed: {}",
            summary.pattern, summary.success_count
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn sample_pairs() -> Vec<RenamePair> {
        vec![
            RenamePair::new("old_file_0.txt", "file_1.txt"),
            RenamePair::new("old_file_1.txt", "file_2.txt"),
        ]
    }

    #[test]
    fn test_display_preview() {
        let mut output = Vec::new();

        display_preview(&sample_pairs(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("RENAME PREVIEW"));
        assert!(output_str.contains("old_file_0.txt"));
        assert!(output_str.contains("-> file_1.txt"));
        assert!(output_str.contains("2 files would be renamed"));
    }

    #[test]
    fn test_display_preview_json() {
        let mut output = Vec::new();

        display_preview_json(&sample_pairs(), &mut output).unwrap();

        let parsed: Vec<RenamePair> = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, sample_pairs());
    }

    #[test]
    fn test_display_execution_report_with_errors() {
        let report = ExecutionReport {
            success_count: 2,
            failure_count: 1,
            errors: vec!["Target file already exists: file_1.txt".to_string()],
            items: vec![],
        };
        let mut output = Vec::new();

        display_execution_report(&report, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Renamed 2 files, 1 failed."));
        assert!(output_str.contains("already exists"));
    }

    #[test]
    fn test_display_execution_report_clean() {
        let report = ExecutionReport {
            success_count: 3,
            failure_count: 0,
            errors: vec![],
            items: vec![],
        };
        let mut output = Vec::new();

        display_execution_report(&report, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Renamed 3 files, 0 failed."));
        assert!(!output_str.contains("Errors"));
    }

    #[test]
    fn test_display_history_empty() {
        let mut output = Vec::new();

        display_history(&[], &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("No rename operations recorded"));
    }

    #[test]
    fn test_display_history_entries() {
        let summaries = vec![OperationSummary {
            folder: PathBuf::from("/photos"),
            pattern: "img_{num}".to_string(),
            success_count: 5,
            executed_at: Utc::now(),
        }];
        let mut output = Vec::new();

        display_history(&summaries, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("RENAME HISTORY"));
        assert!(output_str.contains("/photos"));
        assert!(output_str.contains("pattern: img_{num}"));
        assert!(output_str.contains("renamed: 5"));
    }
}
