//! Command line front end for the `almanac` weather and news dashboard.
//!
//! Every command drives the same query flows as the browser dashboard: a weather lookup, a news
//! lookup, or a history refresh, each reported with the panel's loaded data or its error banner.
//!
//! # Usage
//!
//! ```bash
//! # Write a configuration file pointing at a backend
//! almanac init --base-url http://127.0.0.1:5000
//!
//! # Current weather for a city (the configured default city if omitted)
//! almanac weather "São Paulo"
//!
//! # Headlines for a category and country
//! almanac news --category technology --country gb
//!
//! # Recent searches
//! almanac history
//!
//! # Render the whole dashboard to an HTML file
//! almanac render --out dashboard.html
//!
//! # Interactive session (also the default with no command)
//! almanac dashboard
//! ```
//!
//! Logs go to stderr; raise verbosity with `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use almanac::{
  config::Config,
  dashboard::{Dashboard, QueryOutcome},
  history::HistoryLog,
  models::*,
  panel::PanelState,
};
use chrono::{DateTime, Utc};
use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Weather, news and search history from the command line")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default platform-specific
  /// configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Backend root URL, overriding the configuration file
  #[arg(long, global = true)]
  base_url: Option<String>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Option<Commands>,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// Where the configuration file lives for this invocation.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }

  /// Loads the configuration file (or defaults) and applies command line overrides.
  fn load_config(&self) -> Result<Config> {
    let config = Config::load_or_default(self.config_path())?;
    Ok(match &self.base_url {
      Some(base_url) => config.with_base_url(base_url),
      None => config,
    })
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// Output goes to stderr so command output on stdout stays clean.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Entry point for the almanac CLI application
///
/// Parses arguments, sets up logging, loads the configuration, and runs the requested command
/// (the interactive dashboard when none is given). Query failures are reported and do not fail the
/// process; configuration, file system and terminal errors do.
#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let command = cli.command.clone().unwrap_or(Commands::Dashboard);
  trace!("Running {:?}", command);

  match run(&cli, command).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}{}", style(ERROR_PREFIX).red(), style(e).red());
      ExitCode::FAILURE
    },
  }
}

/// Dispatches `command`, waiting for background history refreshes before returning.
async fn run(cli: &Cli, command: Commands) -> Result<()> {
  let command = match command {
    Commands::Init(init_args) => {
      return init(cli, &cli.config_path(), cli.base_url.as_deref(), init_args);
    },
    command => command,
  };

  let config = cli.load_config()?;
  debug!("Using backend at {}", config.base_url);
  let dashboard = Dashboard::new(config.collaborator()?);

  let result = match command {
    Commands::Weather(args) => weather(cli, &dashboard, &config, args).await,
    Commands::News(args) => news(cli, &dashboard, &config, args).await,
    Commands::History => history(cli, &dashboard).await,
    Commands::Render(args) => render(cli, &dashboard, &config, args).await,
    Commands::Dashboard => interactive(cli, &dashboard, &config).await,
    // handled before the configuration is loaded
    Commands::Init(_) => Ok(()),
  };

  dashboard.settle().await;
  result
}
