//! Command handlers.
//!
//! Each handler receives already-parsed arguments and loaded config, and
//! returns a [`CliResult`](crate::error::CliResult).

pub mod config;
pub mod validate;

/// Printed when no target is given.
pub const USAGE: &str = "usage: w3c-validator [--verbose] FILE|URL...";
