mod logging;
mod output;
mod settings;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use propgen_core::{
    Error as CoreError, Metadata, MetadataTree, metadata_json_schema, metadata_of,
    validate_metadata_json,
};
use propgen_generate::{
    ExhaustiveOptions, GenerationError, count_combinations, exhaustive_bounded, sample,
};
use thiserror::Error;
use uuid::Uuid;

use logging::{LogFormat, LoggingError, init_logging};
use output::emit_json;
use settings::{Settings, SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("metadata error: {0}")]
    Metadata(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid metadata document: {0}")]
    InvalidDocument(String),
}

#[derive(Parser, Debug)]
#[command(name = "propgen", version, about = "Test data generator for typed props")]
struct Cli {
    /// Settings file; defaults to ./propgen.toml when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log output format, overriding the settings file.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical metadata of a descriptor document.
    Meta(MetaArgs),
    /// Draw random instances of a field mapping.
    Sample(SampleArgs),
    /// Enumerate every representative combination of a field mapping.
    Exhaustive(ExhaustiveArgs),
    /// Print how many combinations `exhaustive` would produce.
    Count(DocumentArgs),
    /// Print the JSON Schema of descriptor documents.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct DocumentArgs {
    /// JSON descriptor document.
    file: PathBuf,
}

#[derive(Args, Debug)]
struct MetaArgs {
    file: PathBuf,
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SampleArgs {
    file: PathBuf,
    #[arg(long)]
    times: Option<usize>,
    #[arg(long)]
    max_size: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExhaustiveArgs {
    file: PathBuf,
    #[arg(long)]
    seed: Option<u64>,
    /// Refuse documents with more combinations than this.
    #[arg(long)]
    max_combinations: Option<u64>,
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(
        &settings.log_level,
        cli.log_format.unwrap_or(settings.log_format),
    )?;

    let run_id = Uuid::new_v4();
    let timer = Instant::now();
    tracing::info!(event = "run_started", run_id = %run_id, command = command_name(&cli.command));

    let result = run(cli.command, &settings);

    let duration_ms = timer.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => tracing::info!(event = "run_finished", run_id = %run_id, status = "success", duration_ms),
        Err(err) => tracing::error!(event = "run_finished", run_id = %run_id, status = "failed", duration_ms, error = %err),
    }
    result
}

fn run(command: Command, settings: &Settings) -> Result<(), CliError> {
    match command {
        Command::Meta(args) => {
            let metadata = load_metadata(&args.file)?;
            emit_json(&metadata, args.out.as_deref())?;
        }
        Command::Sample(args) => run_sample(args, settings)?,
        Command::Exhaustive(args) => run_exhaustive(args, settings)?,
        Command::Count(args) => {
            let tree = load_tree(&args.file)?;
            let count = count_combinations(&tree);
            tracing::info!(event = "combinations_counted", count = %count);
            println!("{count}");
        }
        Command::Schema(args) => {
            emit_json(&metadata_json_schema(), args.out.as_deref())?;
        }
    }
    Ok(())
}

fn run_sample(args: SampleArgs, settings: &Settings) -> Result<(), CliError> {
    let tree = load_tree(&args.file)?;
    let mut options = settings.sample.clone();
    if let Some(times) = args.times {
        options.times = times;
    }
    if let Some(max_size) = args.max_size {
        options.max_size = max_size;
    }
    if args.seed.is_some() {
        options.seed = args.seed;
    }

    let instances = sample(&tree, &options)?;
    emit_json(&instances, args.out.as_deref())?;
    if let Some(out) = &args.out {
        tracing::info!(event = "output_written", path = %out.display(), count = instances.len());
    }
    Ok(())
}

fn run_exhaustive(args: ExhaustiveArgs, settings: &Settings) -> Result<(), CliError> {
    let tree = load_tree(&args.file)?;
    let options = ExhaustiveOptions {
        seed: args.seed.unwrap_or(settings.exhaustive.seed),
        ..ExhaustiveOptions::default()
    };
    let limit = args
        .max_combinations
        .unwrap_or(settings.exhaustive.max_combinations);

    let combinations = exhaustive_bounded(&tree, &options, u128::from(limit))?;
    emit_json(&combinations, args.out.as_deref())?;
    if let Some(out) = &args.out {
        tracing::info!(event = "output_written", path = %out.display(), count = combinations.len());
    }
    Ok(())
}

/// Read, structurally validate, and ingest a descriptor document.
fn load_metadata(path: &Path) -> Result<Metadata, CliError> {
    let content = std::fs::read_to_string(path)?;
    let document: serde_json::Value = serde_json::from_str(&content)?;

    let report = validate_metadata_json(&document)?;
    for warning in &report.warnings {
        tracing::warn!(
            event = "metadata_warning",
            code = %warning.code,
            path = %warning.path,
            message = %warning.message
        );
    }
    if !report.is_ok() {
        let details = report
            .errors
            .iter()
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CliError::InvalidDocument(details));
    }

    let metadata = metadata_of(&document)?;
    tracing::debug!(event = "metadata_loaded", path = %path.display());
    Ok(metadata)
}

fn load_tree(path: &Path) -> Result<MetadataTree, CliError> {
    Ok(load_metadata(path)?.into_tree()?)
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Meta(_) => "meta",
        Command::Sample(_) => "sample",
        Command::Exhaustive(_) => "exhaustive",
        Command::Count(_) => "count",
        Command::Schema(_) => "schema",
    }
}
