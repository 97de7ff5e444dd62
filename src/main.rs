use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfxscan::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "cfxscan",
    version,
    about = "Resolve FiveM servers and locate players across the public server directory",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Load configuration from a TOML file instead of the environment
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of the console layout
    #[arg(long, global = true, default_value = "false")]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show address, players and resources of one server
    Resolve {
        /// Server join link (cfx.re/join/<id>) or bare server id
        link: String,
    },

    /// Find which active servers a player is connected to
    Locate {
        /// Player name or part of it, matched case-insensitively
        player: String,

        /// Maximum number of server detail requests in flight
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let (category, recoverable) = commands::classify_failure(&e);
            tracing::error!(
                error = %e,
                category = category.as_str(),
                recoverable,
                "cfxscan failed"
            );
            eprintln!("[ERROR] {e:#}");
            if recoverable {
                eprintln!(
                    "[HINT] {} error, the API may be busy; try again later",
                    category.as_str()
                );
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    if !cli.json {
        println!("{}", commands::BANNER);
    }

    match cli.command {
        Commands::Resolve { link } => {
            config.validate().context("Invalid configuration")?;
            tracing::info!(link = %link, "Starting resolve command");
            commands::resolve(&config, &link, cli.json).await?;
        }

        Commands::Locate {
            player,
            concurrency,
        } => {
            if let Some(concurrency) = concurrency {
                config.scan.max_concurrent_requests = concurrency;
            }
            config.validate().context("Invalid configuration")?;

            tracing::info!(
                player = %player,
                concurrency = %config.scan.max_concurrent_requests,
                "Starting locate command"
            );
            commands::locate(&config, &player, cli.json).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("cfxscan=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(format!("cfxscan={level},warn")))
            .context("Invalid log level")?
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        "text" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        other => anyhow::bail!("Unknown log format '{other}', expected text or json"),
    }

    Ok(())
}
