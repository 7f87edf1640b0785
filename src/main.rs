use clap::Parser;
use seqrename::cli::{self, Args};
use seqrename::config::{self, EnvDefaults};
use seqrename::error::AppError;
use seqrename::rename::Renamer;
use seqrename::{logging, output, ui};
use std::path::Path;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    debug!("Environment loaded, starting up");

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let defaults = config::defaults_from_env();
    let mut renamer = Renamer::new();

    match &args.folder {
        Some(folder) => run_one_shot(&mut renamer, folder, &args, &defaults),
        None => {
            info!("No folder given, entering interactive mode");
            ui::run_interactive(&mut renamer, &defaults)
                .map_err(|e| AppError::Other(e.to_string()))
        }
    }
}

fn run_one_shot(
    renamer: &mut Renamer,
    folder: &Path,
    args: &Args,
    defaults: &EnvDefaults,
) -> Result<(), AppError> {
    let pattern = args
        .pattern
        .clone()
        .or_else(|| defaults.pattern.clone())
        .ok_or(AppError::MissingPattern)?;

    let filter = args
        .ext
        .as_deref()
        .or(defaults.extension.as_deref())
        .and_then(cli::normalize_extension);

    info!(folder = ?folder, pattern = %pattern, filter = ?filter, "One-shot mode");

    let mut stdout = std::io::stdout();

    let pairs = renamer.preview(folder, &pattern, filter.as_deref())?;

    if args.json {
        output::display_preview_json(&pairs, &mut stdout)
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
        return Ok(());
    }

    output::display_preview(&pairs, &mut stdout)
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    if args.dry {
        println!("\nDry run, nothing renamed. Run without --dry to apply.");
        return Ok(());
    }

    renamer.validate_safe(folder, &pattern, filter.as_deref())?;

    if !args.yes {
        ui::init_colors();
        let proceed = ui::confirm("Proceed with rename?")
            .map_err(|e| AppError::Other(format!("Failed to read confirmation: {}", e)))?;
        if !proceed {
            println!("Rename cancelled.");
            return Ok(());
        }
    }

    let report = renamer.execute(folder, &pattern, filter.as_deref())?;

    output::display_execution_report(&report, &mut stdout)
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;

    Ok(())
}
