//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::Parser;

use w3cv_core::domain::ValidationTarget;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "w3c-validator",
    bin_name = "w3c-validator",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate files and URLs with the W3C validators",
    long_about = "Submits each FILE or URL to the W3C CSS validator (.css), the \
                  markup validator (.htm, .html, .xht, .xhtml) or the unicorn \
                  conformance checker (anything else), and exits 1 if any \
                  errors were reported.",
    after_help = "EXAMPLES:\n\
        \x20 w3c-validator index.html style.css\n\
        \x20 w3c-validator --verbose http://example.org/index.html\n\
        \x20 w3c-validator --show-config",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Print the effective configuration as TOML and exit.
    #[arg(long = "show-config", help = "Print the effective configuration and exit")]
    pub show_config: bool,

    /// Print the default configuration file location and exit.
    #[arg(
        long = "config-path",
        conflicts_with = "show_config",
        help = "Print the default config file path and exit"
    )]
    pub config_path: bool,

    /// Files or `http://` URLs to validate, in order.
    #[arg(value_name = "FILE|URL", help = "Files or URLs to validate")]
    pub targets: Vec<ValidationTarget>,
}

impl Cli {
    /// `true` when the invocation only inspects configuration.
    pub fn is_config_query(&self) -> bool {
        self.show_config || self.config_path
    }
}
