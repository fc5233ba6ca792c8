use anyhow::Result;
use clap::{Parser, Subcommand};
use dbconfig::commands::{self, EnvCommands};
use dbconfig::config::{self, EnvironmentArgs, EnvironmentResolver, FallbackPolicy};
use dbconfig::constants::{CONFIG_FILENAME, DEFAULT_ENVIRONMENT};
use dotenv::dotenv;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to use
    #[arg(long = "config", default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Environment to use
    #[arg(long = "env", default_value = DEFAULT_ENVIRONMENT, global = true)]
    environment: String,

    /// Fail instead of falling back to defaults when the environment is not configured
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect configured environments
    Env {
        #[command(subcommand)]
        command: EnvCommands,
    },

    /// Resolve the environment and verify the database connection
    Check {
        #[command(flatten)]
        overrides: EnvironmentArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);

    tokio::select! {
        result = run_main(cli) => result,
        _ = wait_for_shutdown_signal() => {
            info!("Received shutdown signal, exiting");
            Ok(())
        }
    }
}

async fn wait_for_shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the resolver for the selected environment.
///
/// In strict mode a missing or malformed configuration file is an error;
/// otherwise it only means the fallback environment will be used.
fn environment_resolver(cli: &Cli, overrides: EnvironmentArgs) -> Result<EnvironmentResolver> {
    let (store, policy) = if cli.strict {
        (
            Some(config::load_environments(&cli.config_file)?),
            FallbackPolicy::Deny,
        )
    } else {
        (
            config::try_load_environments(&cli.config_file),
            FallbackPolicy::Allow,
        )
    };

    Ok(EnvironmentResolver::new(&cli.environment)
        .with_store(store, &cli.config_file)
        .with_cli_args(overrides.into())
        .with_fallback_policy(policy))
}

async fn run_main(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Env { command } => match command {
            EnvCommands::Show { format, overrides } => {
                let resolver = environment_resolver(&cli, overrides.clone())?;
                commands::cmd_env_show(resolver, format)
            }
            EnvCommands::Get { key, overrides } => {
                let resolver = environment_resolver(&cli, overrides.clone())?;
                commands::cmd_env_get(resolver, key)
            }
            EnvCommands::List => commands::cmd_env_list(Path::new(&cli.config_file)),
            EnvCommands::Validate => commands::cmd_env_validate(Path::new(&cli.config_file)),
        },
        Commands::Check { overrides } => {
            let resolver = environment_resolver(&cli, overrides.clone())?;
            info!("Checking environment '{}'", cli.environment);
            commands::cmd_check(resolver).await
        }
    }
}
