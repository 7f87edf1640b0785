//! Interactive menu front-end.
//!
//! Collects folder, pattern, and filter input, shows previews, and gates
//! execution behind a confirmation prompt. All rename logic lives in the
//! library; this module only talks to the terminal.

use crate::cli::normalize_extension;
use crate::config::EnvDefaults;
use crate::output;
use crate::rename::Renamer;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    io::stderr().is_terminal()
}

/// Apply the global color override once at startup
pub fn init_colors() {
    if !should_use_colors() {
        colored::control::set_override(false);
    }
}

/// Ask a yes/no question on stdout, reading one line from stdin.
/// EOF counts as "no".
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} (y/n): ", question);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Run the menu loop until the user exits or stdin closes.
pub fn run_interactive(renamer: &mut Renamer, defaults: &EnvDefaults) -> Result<()> {
    init_colors();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_header();

    loop {
        print_menu();

        let Some(choice) = prompt(&mut input, "Select an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => rename_flow(renamer, &mut input, defaults)?,
            "2" => preview_flow(renamer, &mut input, defaults)?,
            "3" => {
                output::display_history(&renamer.history(), &mut io::stdout())
                    .context("Failed to display history")?;
            }
            "4" => undo_flow(renamer),
            "5" => {
                println!("Goodbye.");
                break;
            }
            other => println!("{}", format!("Unknown option: {}", other).yellow()),
        }
    }

    Ok(())
}

fn print_header() {
    println!();
    println!("{}", "============================================".cyan());
    println!("{}", "       SEQRENAME - BATCH FILE RENAMER".cyan().bold());
    println!("{}", "============================================".cyan());
}

fn print_menu() {
    println!();
    println!("MENU OPTIONS:");
    println!("  1. Rename files in a folder");
    println!("  2. Preview rename pattern");
    println!("  3. View rename history");
    println!("  4. Undo last rename operation");
    println!("  5. Exit");
}

/// Print a prompt and read one trimmed line. None means stdin closed.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;

    if read == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Collect folder, pattern, and filter. None when any input is missing or
/// stdin closed; errors are printed, not returned.
fn collect_inputs(
    input: &mut impl BufRead,
    defaults: &EnvDefaults,
) -> Result<Option<(PathBuf, String, Option<String>)>> {
    let Some(folder) = prompt(input, "Folder path: ")? else {
        return Ok(None);
    };
    if folder.is_empty() {
        println!("{}", "ERROR: Folder path cannot be empty".red());
        return Ok(None);
    }

    println!();
    println!("Naming pattern examples:");
    println!("  file_{{num}}       -> file_1.txt, file_2.txt");
    println!("  doc_{{num:03d}}    -> doc_001.txt, doc_002.txt");
    println!("  photo_{{num}}_bak  -> photo_1_bak.jpg");

    let pattern_prompt = match &defaults.pattern {
        Some(default) => format!("Naming pattern [{}]: ", default),
        None => String::from("Naming pattern: "),
    };
    let Some(mut pattern) = prompt(input, &pattern_prompt)? else {
        return Ok(None);
    };
    if pattern.is_empty() {
        match &defaults.pattern {
            Some(default) => pattern = default.clone(),
            None => {
                println!("{}", "ERROR: Pattern cannot be empty".red());
                return Ok(None);
            }
        }
    }

    let filter_prompt = match &defaults.extension {
        Some(default) => format!("Extension to rename [{}] ('*' for all): ", default),
        None => String::from("Extension to rename ('*' or blank for all): "),
    };
    let Some(raw_filter) = prompt(input, &filter_prompt)? else {
        return Ok(None);
    };
    let filter = if raw_filter.is_empty() {
        defaults
            .extension
            .as_deref()
            .and_then(normalize_extension)
    } else {
        normalize_extension(&raw_filter)
    };

    Ok(Some((PathBuf::from(folder), pattern, filter)))
}

fn preview_flow(
    renamer: &Renamer,
    input: &mut impl BufRead,
    defaults: &EnvDefaults,
) -> Result<()> {
    let Some((folder, pattern, filter)) = collect_inputs(input, defaults)? else {
        return Ok(());
    };

    match renamer.preview(&folder, &pattern, filter.as_deref()) {
        Ok(pairs) => {
            output::display_preview(&pairs, &mut io::stdout())
                .context("Failed to display preview")?;
        }
        Err(e) => println!("{}", format!("ERROR: {}", e).red()),
    }

    Ok(())
}

fn rename_flow(
    renamer: &mut Renamer,
    input: &mut impl BufRead,
    defaults: &EnvDefaults,
) -> Result<()> {
    let Some((folder, pattern, filter)) = collect_inputs(input, defaults)? else {
        return Ok(());
    };

    let pairs = match renamer.preview(&folder, &pattern, filter.as_deref()) {
        Ok(pairs) => pairs,
        Err(e) => {
            println!("{}", format!("ERROR: {}", e).red());
            return Ok(());
        }
    };

    output::display_preview(&pairs, &mut io::stdout()).context("Failed to display preview")?;

    if let Err(e) = renamer.validate_safe(&folder, &pattern, filter.as_deref()) {
        println!("{}", format!("ERROR: {}", e).red());
        return Ok(());
    }

    let Some(answer) = prompt(input, "Proceed with rename? (y/n): ")? else {
        return Ok(());
    };
    if answer.to_lowercase() != "y" && answer.to_lowercase() != "yes" {
        println!("Rename cancelled.");
        return Ok(());
    }

    match renamer.execute(&folder, &pattern, filter.as_deref()) {
        Ok(report) => {
            output::display_execution_report(&report, &mut io::stdout())
                .context("Failed to display report")?;
            if report.is_full_success() {
                println!("{}", "All files renamed successfully.".green());
            }
        }
        Err(e) => println!("{}", format!("ERROR: {}", e).red()),
    }

    Ok(())
}

fn undo_flow(renamer: &mut Renamer) {
    match renamer.undo() {
        Ok(message) => println!("{}", message.green()),
        Err(e) => println!("{}", format!("ERROR: {}", e).red()),
    }
}
