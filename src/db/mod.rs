//! Database diagnostics.
//!
//! Luca's persistence is owned by the API server. This module only checks
//! that a PostgreSQL instance is reachable with the configured credentials.

pub mod check;

pub use check::{check_connection, ConnectionReport};
