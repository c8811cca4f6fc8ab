mod logging;
mod settings;

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use qforge_core::{BaseType, TypeTag, Value};
use qforge_generate::{GenerationError, Selector, ValueGenerator};
use qforge_render::csv::write_table_csv;
use qforge_render::{RenderError, render_to};
use schemars::schema_for;
use settings::{
    DEFAULT_SETTINGS_PATH, OutputFormat, Settings, SettingsError, load_settings, save_settings,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "qforge", version, about = "Generate and render typed columnar values")]
struct Cli {
    /// Settings file (defaults to ./qforge.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random value and print it.
    Generate(GenerateArgs),
    /// Render a JSON-encoded value read from a file or stdin.
    Render(RenderArgs),
    /// List supported selectors.
    Kinds,
    /// Print the JSON Schema of the value format.
    Schema,
    /// Manage the settings file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Type code letter, `dictionary` or `table`.
    selector: String,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Vector and column length.
    #[arg(long)]
    len: Option<usize>,
    /// Accept uppercase temporal selectors.
    #[arg(long, default_value_t = false)]
    temporal_vectors: bool,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON value file; stdin when omitted.
    path: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default settings file.
    Init {
        #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => load_settings(path, true)?,
        None => load_settings(&PathBuf::from(DEFAULT_SETTINGS_PATH), false)?,
    };
    let mut log = settings.log.clone();
    log.json |= cli.log_json;
    logging::init_logging(&log).map_err(CliError::Logging)?;

    let run_id = Uuid::new_v4();
    let timer = Instant::now();
    tracing::info!(event = "run_started", run_id = %run_id);

    match cli.command {
        Command::Generate(args) => run_generate(args, &settings)?,
        Command::Render(args) => run_render(args, &settings)?,
        Command::Kinds => run_kinds()?,
        Command::Schema => run_schema()?,
        Command::Config(ConfigCommand::Init { path, force }) => run_config_init(path, force)?,
    }

    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let GenerateArgs {
        selector,
        seed,
        len,
        temporal_vectors,
        format,
    } = args;

    let mut options = settings.generate.clone();
    if seed.is_some() {
        options.seed = seed;
    }
    if let Some(len) = len {
        options.vector_len = len;
    }
    options.temporal_vectors |= temporal_vectors;

    let mut generator = ValueGenerator::new(options)?;
    let value = generator.generate(&selector)?;
    tracing::info!(
        event = "value_generated",
        selector = %selector,
        type_tag = %value.type_tag()
    );

    write_output(&value, format.unwrap_or(settings.output.format))
}

fn run_render(args: RenderArgs, settings: &Settings) -> Result<(), CliError> {
    let content = match &args.path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let value: Value = serde_json::from_str(&content)?;
    tracing::info!(event = "value_loaded", type_tag = %value.type_tag());

    let format = args.format.unwrap_or(settings.output.format);
    if format == OutputFormat::Json {
        return Err(CliError::InvalidConfig(
            "render reads JSON; choose text or csv output".to_string(),
        ));
    }
    write_output(&value, format)
}

fn write_output(value: &Value, format: OutputFormat) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let bytes = match format {
        OutputFormat::Text => render_to(&mut out, value)?,
        OutputFormat::Json => {
            let encoded = serde_json::to_string_pretty(value)?;
            writeln!(out, "{encoded}")?;
            encoded.len() as u64 + 1
        }
        OutputFormat::Csv => {
            let table = value.as_table().ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "csv output requires a table, got {}",
                    value.type_name()
                ))
            })?;
            write_table_csv(&mut out, table)?
        }
    };
    tracing::info!(event = "output_written", format = ?format, bytes_written = bytes);
    Ok(())
}

fn run_kinds() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for selector in Selector::all() {
        let (shape, tag) = match selector {
            Selector::Atom(kind) => (format!("{kind} atom"), i16::from(kind.atom_tag())),
            Selector::Vector(kind) => (vector_label(kind), i16::from(kind.vector_tag())),
            Selector::Dictionary => ("dictionary".to_string(), TypeTag::DICTIONARY.raw()),
            Selector::Table => ("table".to_string(), TypeTag::TABLE.raw()),
        };
        writeln!(out, "{selector}\t{tag}\t{shape}")?;
    }
    Ok(())
}

fn vector_label(kind: BaseType) -> String {
    if kind.is_temporal() {
        format!("{kind} vector (--temporal-vectors)")
    } else {
        format!("{kind} vector")
    }
}

fn run_schema() -> Result<(), CliError> {
    let schema = schema_for!(Value);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}

fn run_config_init(path: PathBuf, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::InvalidConfig(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }
    save_settings(&path, &Settings::default())?;
    tracing::info!(event = "settings_written", path = %path.display());
    Ok(())
}
