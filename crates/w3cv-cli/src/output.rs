//! Output management and formatting.
//!
//! Diagnostics go to stderr; stdout is reserved for `--show-config` and
//! `--config-path`.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use w3cv_core::application::{Diagnostic, Reporter, Severity};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    out: Term,
    diag: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let diag = Term::stderr();
        let no_color = args.no_color || config.output.no_color || !diag.features().colors_supported();

        Self {
            quiet: args.quiet,
            no_color,
            out: Term::stdout(),
            diag,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Plain line on stdout.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.out.write_line(msg)
    }

    /// Render one diagnostic line, or `None` when it is suppressed.
    pub fn render(&self, diagnostic: &Diagnostic) -> Option<String> {
        let severity = diagnostic.severity();
        if self.quiet && severity == Severity::Progress {
            return None;
        }

        let line = diagnostic.to_string();
        if self.no_color {
            return Some(line);
        }

        Some(match severity {
            Severity::Error => line.red().to_string(),
            Severity::Warning => line.yellow().to_string(),
            Severity::Trace => line.dimmed().to_string(),
            Severity::Progress => line.cyan().to_string(),
            Severity::Info => line,
        })
    }
}

impl Reporter for OutputManager {
    fn report(&self, diagnostic: &Diagnostic) {
        let Some(line) = self.render(diagnostic) else {
            return;
        };
        if let Err(e) = self.diag.write_line(&line) {
            tracing::debug!(error = %e, "Failed to write diagnostic");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
