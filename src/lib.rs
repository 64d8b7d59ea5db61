//! # Luca
//!
//! Operator tooling for the Luca finance assistant. The browser frontend lives
//! in the `ui/` crate and its view models in `luca-core`; this crate hosts the
//! `luca` command-line binary.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `luca db-check` | Open one connection to `DATABASE_URL`, report server version, database and user |
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use luca::{db::check_connection, utils::config::DbCheckConfig};
//!
//! #[tokio::main]
//! async fn main() -> luca::Result<()> {
//!     let config = DbCheckConfig::from_env()?;
//!     let report = check_connection(&config).await?;
//!     println!("{} as {}", report.database, report.user);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Argument parsing and terminal output
//! - [`db`] - Database connectivity diagnostics
//! - [`types`] - Error handling
//! - [`utils`] - Configuration loading

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Command-line parsing and colored output.
pub mod cli;
/// Database connectivity diagnostics.
pub mod db;
/// Core types and error handling.
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::{check_connection, ConnectionReport};
pub use types::{AppError, Result};
pub use utils::config::DbCheckConfig;
