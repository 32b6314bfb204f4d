//! Shadeline - lightness-indexed gradient and palette builder
//!
//! Without a subcommand this opens the interactive editor. Subcommands give
//! headless access to the same engine for scripts and build pipelines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shadeline::cli::{
    CliError, ConfigArgs, DocumentArgs, ExitCode, ExportArgs, GradientArgs, PaletteArgs,
    SampleArgs,
};
use shadeline::constants::APP_BINARY_NAME;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shadeline - lightness-indexed gradient and palette builder
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to a file (the interactive editor only logs when this is set)
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Document to open in the interactive editor
    #[command(flatten)]
    seed: DocumentArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the gradient stops or sampled rows
    Gradient(GradientArgs),
    /// Resolve the color at a position or lightness
    Sample(SampleArgs),
    /// Pin palette entries and print the palette
    Palette(PaletteArgs),
    /// Export the palette as CSS, SVG, JSON or a query string
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

/// Sets up tracing. `RUST_LOG` wins; otherwise `debug` with `--verbose`.
fn init_logging(verbose: bool, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        // Logging to stderr would tear through the alternate screen
        None if interactive => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

#[cfg(feature = "ratatui")]
fn run_interactive(seed: &DocumentArgs) -> Result<(), CliError> {
    use shadeline::cli::common::load_config;
    use shadeline::tui;

    let config = load_config()?;
    let document = seed.build(&config)?;
    let mut app_state = tui::AppState::new(document, config);

    let to_cli = |e: anyhow::Error| CliError::io(format!("{e:#}"));
    let mut terminal = tui::setup_terminal().map_err(to_cli)?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal).map_err(to_cli)?;
    result.map_err(to_cli)
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive(_seed: &DocumentArgs) -> Result<(), CliError> {
    Err(CliError::validation(format!(
        "{APP_BINARY_NAME} was built without the interactive editor. Use a subcommand; see --help"
    )))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref(), cli.command.is_none()) {
        eprintln!("Error: {e:#}");
        std::process::exit(ExitCode::Io.code());
    }

    let result = match &cli.command {
        Some(Command::Gradient(args)) => args.execute(),
        Some(Command::Sample(args)) => args.execute(),
        Some(Command::Palette(args)) => args.execute(),
        Some(Command::Export(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(),
        None => run_interactive(&cli.seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
