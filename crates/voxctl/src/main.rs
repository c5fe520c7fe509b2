//! voxctl - create ElevenLabs conversational voice agents
//!
//! Main entry point for the voxctl CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Style;

mod commands;

use commands::{create, presets, voices};

const USAGE_EXAMPLES: &str = "\
Examples:
  voxctl                    Create an agent with the default voice
  voxctl list-voices        List available voices
  voxctl create <voice_id>  Create an agent with a specific voice";

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// voxctl - create ElevenLabs conversational voice agents
#[derive(Parser)]
#[command(name = "voxctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = USAGE_EXAMPLES)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config directory (default: platform config dir, or VOXCTL_CONFIG_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// API base URL (default: https://api.elevenlabs.io)
    #[arg(long, global = true, env = "ELEVENLABS_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Without a command, an agent is created with the configured defaults
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a conversational agent
    Create(create::CreateArgs),

    /// List available voices (first 20)
    ListVoices(voices::ListVoicesArgs),

    /// Show the bundled voice presets
    Presets,
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

/// Dotenv file read from the working directory.
const ENV_FILE: &str = ".env";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // .env must be loaded before clap reads env-backed arguments; only the
    // working directory is consulted, never its parents
    let dotenv = dotenvy::from_path(ENV_FILE);

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dotenv {
        Ok(()) => tracing::debug!(path = ENV_FILE, "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("failed to load .env: {}", e),
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Console logging on stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default = if verbose {
        "voxctl=debug,voxctl_client=debug,voxctl_config=debug,info"
    } else {
        "voxctl=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let loaded = voxctl_config::load_config_with_options(None, cli.config.as_deref())?;
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }
    for path in loaded.loaded_from() {
        tracing::debug!(path = %path.display(), "config loaded");
    }

    let api_key = voxctl_config::resolve_api_key(loaded.config.api_key());

    let ctx = commands::Context {
        config: loaded.config,
        api_url: cli.api_url,
        api_key,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        None => create::run(create::CreateArgs::default(), &ctx).await,
        Some(Commands::Create(args)) => create::run(args, &ctx).await,
        Some(Commands::ListVoices(args)) => voices::run(args, &ctx).await,
        Some(Commands::Presets) => presets::run(&ctx),
    }
}

/// Print an error chain for the operator, with a hint where one helps.
fn report(err: &anyhow::Error) {
    let red = Style::new().red().bold();
    let dim = Style::new().dim();

    eprintln!("{} {:#}", red.apply_to("error:"), err);

    let hint = match err.downcast_ref::<voxctl_client::Error>() {
        Some(voxctl_client::Error::MissingCredential) => Some(format!(
            "Set {} in your environment or in a .env file.",
            voxctl_config::API_KEY_ENV
        )),
        Some(e) if e.is_auth_error() => {
            Some("The API key was rejected; check that it is current.".to_string())
        }
        Some(e) if e.is_rate_limited() => {
            Some("Rate limited by the API; wait a moment and re-run.".to_string())
        }
        _ => None,
    };

    if let Some(hint) = hint {
        eprintln!("{}", dim.apply_to(hint));
    }
}
