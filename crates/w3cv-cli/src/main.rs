//! # w3c-validator
//!
//! Submits files and URLs to the W3C CSS, markup and unicorn validators
//! and exits non-zero when any errors were reported.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (`--help` / `--version` exit 0, bad flags exit 2).
//! 2. Answer configuration queries, or print usage when no target is given.
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (defaults + file + env).
//! 5. Build the [`OutputManager`].
//! 6. Validate every target and map the tally to an exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! |  0   | Every target validated without errors           |
//! |  1   | Errors reported, a target failed, or bad setup  |
//! |  2   | Invalid command-line arguments                  |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout with code 0; real parse errors to
            // stderr with code 2.
            let code = e.exit_code();
            let _ = e.print();
            return ExitCode::from(u8::try_from(code).unwrap_or(2));
        }
    };

    // ── 2. Usage ──────────────────────────────────────────────────────────
    if cli.targets.is_empty() && !cli.is_config_query() {
        eprintln!("{}", commands::USAGE);
        return ExitCode::from(1);
    }

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        targets = cli.targets.len(),
        "CLI started"
    );

    // ── 4. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, &cli.global),
    };

    // ── 5. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 6. Dispatch + error handling ──────────────────────────────────────
    match run(&cli, &config, output) {
        Ok(code) => ExitCode::from(code),
        Err(e) => handle_error(e, &cli.global),
    }
}

/// Dispatch to the config query or the validation run.
#[instrument(skip_all)]
fn run(cli: &Cli, config: &AppConfig, output: OutputManager) -> CliResult<u8> {
    if cli.show_config {
        commands::config::show(config, &output)?;
        return Ok(0);
    }
    if cli.config_path {
        commands::config::path(&output)?;
        return Ok(0);
    }

    let tally = commands::validate::execute(&cli.targets, &cli.global, config, output)?;
    Ok(tally.exit_code())
}

/// Translate a `CliError` into a user message and exit code.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let colored = !global.no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.format(global.echo(), colored));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check: catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }

    #[test]
    fn help_is_not_an_error_exit() {
        let err = Cli::try_parse_from(["w3c-validator", "--help"]).unwrap_err();
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn unknown_flag_exits_two() {
        let err = Cli::try_parse_from(["w3c-validator", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
