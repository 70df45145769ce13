use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_composer_rs::cli::{Cli, Command};
use meal_composer_rs::composer::{classify, to_record, ComposerConfig};
use meal_composer_rs::error::Result;
use meal_composer_rs::interface::{display_composition, display_record, edit_session, SessionOutcome};
use meal_composer_rs::state::{export_csv, load_analysis, load_record, save_record, CompositionStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so tables and prompts on stdout stay clean.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meal_composer_rs={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.composer_config();

    match &cli.command {
        Command::Classify { input, json } => cmd_classify(input, *json, config),
        Command::Edit { input, output } => cmd_edit(input, output, config),
        Command::Export { input, csv } => cmd_export(input, csv),
    }
}

/// Load an analysis (or a saved record, which has the same food shape) into a store.
fn load_store(input: &Path, config: ComposerConfig) -> Result<CompositionStore> {
    let entries = load_analysis(input)?;
    Ok(CompositionStore::with_groups(classify(&entries), config))
}

/// Group an analysis result and print it.
fn cmd_classify(input: &Path, json: bool, config: ComposerConfig) -> Result<()> {
    let store = load_store(input, config)?;

    if json {
        let record = to_record(store.groups());
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        display_composition(&store, true);
    }

    Ok(())
}

/// Edit a meal interactively and save the result.
fn cmd_edit(input: &Path, output: &Path, config: ComposerConfig) -> Result<()> {
    let mut store = load_store(input, config)?;

    match edit_session(&mut store)? {
        SessionOutcome::Save => {
            let record = store.to_record();
            save_record(output, &record)?;
            display_record(&record);
            println!("Meal saved to {}.", output.display());
        }
        SessionOutcome::Discard => println!("Changes discarded."),
    }

    Ok(())
}

/// Export a saved record as CSV.
fn cmd_export(input: &Path, csv_path: &Path) -> Result<()> {
    if !input.exists() {
        eprintln!("Record file not found: {}", input.display());
        return Ok(());
    }

    let record = load_record(input)?;
    export_csv(csv_path, &record)?;
    println!(
        "Exported {} foods to {}.",
        record.foods.len(),
        csv_path.display()
    );

    Ok(())
}
