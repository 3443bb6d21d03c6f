// crates/verdict-cli/src/main.rs
//
// CLI entrypoint for the Verdict engine operator tools.
//
// Loads configuration, initializes tracing, opens the node database, and
// runs one subcommand as a single committed-or-discarded state transition.

mod commands;
mod config;
mod output;
mod session;

use clap::{Parser, Subcommand};
use commands::admin::AdminCmd;
use commands::params::ParamsCmd;
use commands::slash::SlashCmd;
use config::CliConfig;
use output::OutputFormat;
use session::Session;

/// Verdict CLI: inspect and administer the slashing engine's state.
#[derive(Parser, Debug)]
#[command(
    name = "verdict",
    version = "0.1.0",
    about = "Verdict CLI for the content-staking slashing engine"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "~/.verdict/config.toml")]
    config: String,

    /// Data directory; overrides the config file value.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed slashing state with the configured genesis params.
    Init,

    /// Governance params: show, set.
    #[command(subcommand)]
    Params(ParamsCmd),

    /// Admin registry: add, remove, list.
    #[command(subcommand)]
    Admin(AdminCmd),

    /// Slash ledger queries.
    #[command(subcommand)]
    Slash(SlashCmd),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before tracing so the configured level applies;
    // the outcome is logged once the subscriber is up.
    let loaded = CliConfig::load(&cli.config);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => CliConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &loaded {
        Ok(_) => tracing::info!("Loaded configuration from {}", cli.config),
        Err(e) => tracing::warn!(
            "Could not load config from {}: {}. Using defaults.",
            cli.config,
            e
        ),
    }

    // CLI --data-dir flag overrides the config file value.
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    tracing::debug!("Data directory: {}", config.data_dir);

    let format = OutputFormat::from_json_flag(cli.json);
    let session = Session::open(&config)?;

    match &cli.command {
        Commands::Init => commands::init::run(&session, &config)?,
        Commands::Params(cmd) => commands::params::run(&session, cmd, format)?,
        Commands::Admin(cmd) => commands::admin::run(&session, cmd, format)?,
        Commands::Slash(cmd) => commands::slash::run(&session, cmd, format)?,
    }

    Ok(())
}
