mod cmd;
mod output;
mod workdir;

use armada_core::config::Config;
use clap::{Parser, Subcommand};
use cmd::develop::DevelopArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "armada",
    about = "Armada microservice tooling: local development mode",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding per-session development records (default: OS temp dir)
    #[arg(long, global = true, env = "ARMADA_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn development mode on (or off) for a microservice in this shell session
    Develop(DevelopArgs),

    /// Show the development record of this shell session
    Status,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli
        .state_dir
        .map(Config::with_state_dir)
        .unwrap_or_else(Config::from_env);
    tracing::debug!(state_dir = %config.state_dir.display(), "resolved config");

    let result = match cli.command {
        Commands::Develop(args) => cmd::develop::run(&config, args, cli.json),
        Commands::Status => cmd::status::run(&config, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
