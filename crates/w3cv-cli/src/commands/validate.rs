//! Default command: validate every target and report the tally.

use tracing::{debug, info, instrument};

use w3cv_adapters::HttpTransport;
use w3cv_core::{
    application::ValidationService,
    domain::{Tally, ValidationTarget},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Wire the production adapters and validate `targets` in order.
///
/// Returns the final tally; findings are not errors.  An `Err` means the
/// run could not start (bad endpoint, unbuildable HTTP client).
#[instrument(skip_all, fields(targets = targets.len()))]
pub fn execute(
    targets: &[ValidationTarget],
    global: &GlobalArgs,
    config: &AppConfig,
    output: OutputManager,
) -> CliResult<Tally> {
    let transport = HttpTransport::new(&config.http_settings())?;
    let cooldown = config.cooldown();
    debug!(
        cooldown_ms = cooldown.duration().as_millis(),
        max_attempts = config.validation.max_attempts,
        "Adapters ready"
    );

    let service = ValidationService::new(
        Box::new(transport),
        Box::new(cooldown),
        Box::new(output),
        config.service_options(global.echo()),
    )?;

    let tally = service.run(targets);
    info!(
        errors = tally.errors,
        warnings = tally.warnings,
        "Validation finished"
    );
    Ok(tally)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn global() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn invalid_endpoint_stops_before_any_request() {
        let mut config = AppConfig::default();
        config.endpoints.css = "not a url".into();
        let output = OutputManager::new(&global(), &config);

        let targets = [ValidationTarget::parse("a.css").unwrap()];
        let err = execute(&targets, &global(), &config, output).unwrap_err();
        assert!(matches!(err, CliError::Core(_)), "{err:?}");
    }

    #[test]
    fn zero_attempt_budget_is_rejected() {
        let mut config = AppConfig::default();
        config.validation.max_attempts = 0;
        let output = OutputManager::new(&global(), &config);

        assert!(execute(&[], &global(), &config, output).is_err());
    }

    #[test]
    fn missing_local_file_counts_one_error() {
        let mut config = AppConfig::default();
        config.validation.cooldown_secs = 0;
        let output = OutputManager::new(&global(), &config);

        let targets = [ValidationTarget::parse("no/such/file.css").unwrap()];
        let tally = execute(&targets, &global(), &config, output).unwrap();
        assert_eq!(tally.errors, 1);
        assert_eq!(tally.exit_code(), 1);
    }
}
