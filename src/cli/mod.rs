//! CLI module for Luca
//!
//! Provides command-line interface parsing for the `luca` binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

use crate::utils::config::DEFAULT_CONNECT_TIMEOUT_SECS;

/// Luca - operator tools for the finance assistant
#[derive(Parser, Debug)]
#[command(
    name = "luca",
    version,
    about = "Luca - operator tools for the finance assistant",
    long_about = "Operator tools for the Luca finance assistant.\n\n\
                  The connection string is read from DATABASE_URL; a .env file in the\n\
                  working directory is loaded first when present.",
    after_help = "EXAMPLES:\n    \
                  luca db-check                 # Check DATABASE_URL\n    \
                  luca db-check --timeout 3     # Give up after 3 seconds\n    \
                  luca db-check --json          # Machine-readable report"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the database in DATABASE_URL is reachable
    ///
    /// Opens exactly one connection, prints the server version, database
    /// name and connected user, then exits. Exit status is 0 on success
    /// and 1 on any failure.
    DbCheck {
        /// Connect timeout in seconds
        #[arg(long, env = "LUCA_DB_TIMEOUT", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
        timeout: u64,

        /// Print the result as JSON on stdout
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_db_check_defaults() {
        let cli = Cli::try_parse_from(["luca", "db-check"]).unwrap();
        match cli.command {
            Commands::DbCheck { timeout, json } => {
                assert_eq!(timeout, 10);
                assert!(!json);
            }
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_db_check_flags() {
        let cli =
            Cli::try_parse_from(["luca", "db-check", "--timeout", "3", "--json", "-v"]).unwrap();
        match cli.command {
            Commands::DbCheck { timeout, json } => {
                assert_eq!(timeout, 3);
                assert!(json);
            }
        }
        assert!(cli.verbose);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["luca"]).is_err());
    }
}
