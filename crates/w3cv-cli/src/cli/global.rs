//! Global arguments shared by every invocation.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! sit next to the positional targets without repetition

use clap::Args;
use std::path::PathBuf;

/// Global arguments.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Echo requests and raw validator answers, and raise log verbosity.
    ///
    /// Pass once to echo (`-v`), twice for DEBUG logs (`-vv`), three times
    /// for TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Echo requests and responses (-v, -vv, -vvv)",
        long_help = "Increase verbosity:
    (none)  - Progress and findings only
    -v      - Echo each request and raw JSON answer
    -vv     - Debug level logs
    -vvv    - Trace level logs"
    )]
    pub verbose: u8,

    /// Suppress progress lines.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress progress output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// `true` when requests and raw answers should be echoed.
    pub fn echo(&self) -> bool {
        self.verbose > 0
    }
}
