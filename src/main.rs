use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use luca::{
    cli::{output::Output, Cli, Commands},
    db::check_connection,
    types::ErrorReport,
    utils::config::DbCheckConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("failed to initialise logging: {:#}", e);
        return ExitCode::FAILURE;
    }

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        Commands::DbCheck { timeout, json } => db_check(&output, timeout, json).await,
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "luca=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("a global subscriber is already installed")
}

async fn db_check(output: &Output, timeout_secs: u64, json: bool) -> ExitCode {
    // Fails before any connection attempt when DATABASE_URL is missing.
    let result = match DbCheckConfig::from_env() {
        Ok(config) => {
            let config = config.with_connect_timeout(Duration::from_secs(timeout_secs));
            if !json {
                output.header("Database connectivity check");
                output.info(&format!("Connecting to {}", config.redacted_url()));
            }
            check_connection(&config).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            if json {
                let mut value = serde_json::json!({ "ok": true });
                value["report"] = serde_json::to_value(&report).unwrap_or_default();
                println!("{}", value);
            } else {
                output.connection_report(&report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Database check failed");
            if json {
                match serde_json::to_string(&ErrorReport::from(&e)) {
                    Ok(line) => println!("{}", line),
                    Err(_) => output.connection_failure(&e),
                }
            } else {
                output.connection_failure(&e);
            }
            ExitCode::FAILURE
        }
    }
}
