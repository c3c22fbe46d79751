//! `--show-config` / `--config-path`: inspect configuration without validating.

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Print the effective configuration as TOML.
pub fn show(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    output.print(config.to_toml()?.trim_end())?;
    Ok(())
}

/// Print the default configuration file location.
pub fn path(output: &OutputManager) -> CliResult<()> {
    output.print(&AppConfig::config_path().display().to_string())?;
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
