//! Validation Service - main application orchestrator.
//!
//! This service drives one batch of targets:
//! 1. Build the request for a target
//! 2. Send it through the transport, pausing afterwards
//! 3. Interpret the response, retrying unparseable answers
//! 4. Score the result and fold it into the batch tally
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument};

use crate::{
    application::{
        error::TransportError,
        ports::{Cooldown, Diagnostic, Reporter, Transport},
    },
    domain::{
        Contribution, DomainValidator as validator, Endpoints, Tally, ValidationRequest,
        ValidationResult, ValidationTarget, interpret,
    },
    error::{W3cvError, W3cvResult},
};

/// Default number of transport attempts per target.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Knobs for a [`ValidationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOptions {
    pub endpoints: Endpoints,
    /// Attempts per target before an unparseable answer becomes a failure.
    pub max_attempts: u32,
    /// Echo requests and raw JSON answers to the reporter.
    pub verbose: bool,
    /// Add generic checker verdicts to the error total instead of replacing it.
    pub accumulate_generic: bool,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            verbose: false,
            accumulate_generic: false,
        }
    }
}

/// Why a target could not be scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Every attempt produced an uninterpretable answer.
    Unparseable { attempts: u32 },
    /// The HTTP exchange itself failed.
    Transport(TransportError),
}

/// Terminal state of one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    Scored(ValidationResult),
    Failed(FailureReason),
}

/// Per-target retry state machine.
enum AttemptState {
    /// About to make attempt number `n` (zero based).
    Attempt(u32),
    Scored(ValidationResult),
    Failed(FailureReason),
}

/// Main validation service.
///
/// Orchestrates request building, transport, interpretation and scoring.
pub struct ValidationService {
    transport: Box<dyn Transport>,
    cooldown: Box<dyn Cooldown>,
    reporter: Box<dyn Reporter>,
    options: ServiceOptions,
}

impl ValidationService {
    /// Create a new validation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use w3cv_core::application::{ServiceOptions, ValidationService};
    ///
    /// let service = ValidationService::new(
    ///     transport, // impl Transport
    ///     cooldown,  // impl Cooldown
    ///     reporter,  // impl Reporter
    ///     ServiceOptions::default(),
    /// )?;
    /// ```
    pub fn new(
        transport: Box<dyn Transport>,
        cooldown: Box<dyn Cooldown>,
        reporter: Box<dyn Reporter>,
        options: ServiceOptions,
    ) -> W3cvResult<Self> {
        validator::validate_endpoints(&options.endpoints).map_err(W3cvError::Domain)?;
        validator::validate_attempt_budget(options.max_attempts).map_err(W3cvError::Domain)?;

        Ok(Self {
            transport,
            cooldown,
            reporter,
            options,
        })
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// Validate every target in order and return the final tally.
    ///
    /// A failing target never aborts the batch.
    #[instrument(skip_all)]
    pub fn run<'a, I>(&self, targets: I) -> Tally
    where
        I: IntoIterator<Item = &'a ValidationTarget>,
    {
        let mut tally = Tally::new();
        let mut count = 0usize;

        for target in targets {
            count += 1;
            self.reporter.report(&Diagnostic::Validating(target.clone()));

            let outcome = self.validate(target);
            tally.apply(self.contribution(&outcome));

            debug!(
                target = %target,
                errors = tally.errors,
                warnings = tally.warnings,
                "Tally updated"
            );
        }

        info!(
            targets = count,
            errors = tally.errors,
            warnings = tally.warnings,
            "Batch completed"
        );
        tally
    }

    /// Drive one target to a terminal state.
    #[instrument(skip_all, fields(target = %target, kind = %target.kind()))]
    pub fn validate(&self, target: &ValidationTarget) -> TargetOutcome {
        let mut state = AttemptState::Attempt(0);

        loop {
            state = match state {
                AttemptState::Attempt(n) => match self.attempt(target) {
                    Ok(ValidationResult::Unparseable) => {
                        let made = n + 1;
                        debug!(attempt = made, "Unparseable validator response");
                        if made < self.options.max_attempts {
                            self.reporter.report(&Diagnostic::Retrying(target.clone()));
                            AttemptState::Attempt(made)
                        } else {
                            AttemptState::Failed(FailureReason::Unparseable { attempts: made })
                        }
                    }
                    Ok(result) => AttemptState::Scored(result),
                    Err(e) => {
                        debug!(error = %e, hint = e.hint(), "Transport failed");
                        AttemptState::Failed(FailureReason::Transport(e))
                    }
                },
                AttemptState::Scored(result) => return TargetOutcome::Scored(result),
                AttemptState::Failed(reason) => {
                    self.reporter.report(&Diagnostic::Failed(target.clone()));
                    return TargetOutcome::Failed(reason);
                }
            };
        }
    }

    /// What a terminal outcome does to the tally. Reports findings as a side
    /// effect.
    pub fn contribution(&self, outcome: &TargetOutcome) -> Contribution {
        match outcome {
            TargetOutcome::Scored(result) => self.score(result),
            TargetOutcome::Failed(_) => Contribution::FAILURE,
        }
    }

    /// Report a result's findings and turn it into a tally contribution.
    pub fn score(&self, result: &ValidationResult) -> Contribution {
        match result {
            ValidationResult::Css(report) => {
                if report.error_count > 0 {
                    self.reporter
                        .report(&Diagnostic::ErrorCount(report.error_count));
                }
                if report.warning_count > 0 {
                    self.reporter
                        .report(&Diagnostic::WarningCount(report.warning_count));
                }
                Contribution::Add {
                    errors: report.error_count,
                    warnings: report.warning_count,
                }
            }
            ValidationResult::Generic(report) => {
                self.reporter
                    .report(&Diagnostic::GenericOutput(report.text.clone()));
                let errors = u64::from(!report.passed());
                if self.options.accumulate_generic {
                    Contribution::Add {
                        errors,
                        warnings: 0,
                    }
                } else {
                    Contribution::SetErrors(errors)
                }
            }
            ValidationResult::Html(report) => {
                let (mut errors, mut warnings) = (0, 0);
                for msg in &report.messages {
                    self.reporter.report(&Diagnostic::Message(msg.clone()));
                    if msg.is_error() {
                        errors += 1;
                    } else {
                        warnings += 1;
                    }
                }
                Contribution::Add { errors, warnings }
            }
            ValidationResult::Unparseable => Contribution::NONE,
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// One request/response round trip, followed by the cooldown.
    fn attempt(&self, target: &ValidationTarget) -> Result<ValidationResult, TransportError> {
        let request = ValidationRequest::build(target, &self.options.endpoints);
        debug!(method = %request.method, endpoint = %request.endpoint, "Sending request");

        if self.options.verbose {
            self.reporter
                .report(&Diagnostic::Request(request.to_string()));
        }

        let response = self.transport.execute(&request);
        let outcome = response.map(|raw| {
            if self.options.verbose && request.kind.answers_json() {
                self.reporter.report(&Diagnostic::RawResponse(raw.clone()));
            }
            interpret(request.kind, &raw)
        });

        self.cooldown.pause();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::output::{MockCooldown, MockTransport};
    use crate::domain::{CssReport, HtmlMessage, Method};

    const CSS_CLEAN: &str = r#"{"cssvalidation":{"result":{"errorcount":0,"warningcount":0}}}"#;
    const CSS_DIRTY: &str = r#"{"cssvalidation":{"result":{"errorcount":2,"warningcount":1}}}"#;
    const HTML_ONE_ERROR: &str =
        r#"{"messages":[{"type":"error","message":"bad tag","lastLine":3,"lastColumn":5}]}"#;
    const GENERIC_FAILED: &str = "Unicorn\nThis document has not passed the test: http://x\n";
    const GENERIC_PASSED: &str = "Unicorn\nThis document has passed the test: http://x\n";

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Diagnostic>>>);

    impl Reporter for Recorder {
        fn report(&self, diagnostic: &Diagnostic) {
            self.0.lock().unwrap().push(diagnostic.clone());
        }
    }

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().iter().map(ToString::to_string).collect()
        }
    }

    fn target(raw: &str) -> ValidationTarget {
        ValidationTarget::parse(raw).unwrap()
    }

    fn cooldown(times: usize) -> Box<MockCooldown> {
        let mut cooldown = MockCooldown::new();
        cooldown.expect_pause().times(times).return_const(());
        Box::new(cooldown)
    }

    fn answering(body: &'static str, times: usize) -> Box<MockTransport> {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .times(times)
            .returning(move |_| Ok(body.to_owned()));
        Box::new(transport)
    }

    fn service(
        transport: Box<MockTransport>,
        cooldown: Box<MockCooldown>,
        options: ServiceOptions,
    ) -> (ValidationService, Recorder) {
        let recorder = Recorder::default();
        let service =
            ValidationService::new(transport, cooldown, Box::new(recorder.clone()), options)
                .unwrap();
        (service, recorder)
    }

    // ── scoring ───────────────────────────────────────────────────────────

    #[test]
    fn clean_css_adds_nothing_and_logs_nothing() {
        let (svc, rec) = service(answering(CSS_CLEAN, 1), cooldown(1), ServiceOptions::default());
        let tally = svc.run([&target("a.css")]);

        assert_eq!(tally, Tally::new());
        assert_eq!(rec.lines(), vec!["validating: a.css ..."]);
    }

    #[test]
    fn dirty_css_adds_counts_and_logs_both() {
        let (svc, rec) = service(answering(CSS_DIRTY, 1), cooldown(1), ServiceOptions::default());
        let tally = svc.run([&target("a.css")]);

        assert_eq!(
            tally,
            Tally {
                errors: 2,
                warnings: 1
            }
        );
        assert_eq!(
            rec.lines(),
            vec!["validating: a.css ...", "errors: 2", "warnings: 1"]
        );
    }

    #[test]
    fn html_error_message_counted_and_formatted() {
        let (svc, rec) = service(
            answering(HTML_ONE_ERROR, 1),
            cooldown(1),
            ServiceOptions::default(),
        );
        let tally = svc.run([&target("index.html")]);

        assert_eq!(
            tally,
            Tally {
                errors: 1,
                warnings: 0
            }
        );
        assert!(rec.lines().contains(&"error: line 3: column 5: bad tag".to_owned()));
    }

    #[test]
    fn non_error_html_messages_are_warnings() {
        let svc = service(answering("", 0), cooldown(0), ServiceOptions::default()).0;
        let msg = |kind: &str| HtmlMessage {
            kind: kind.into(),
            message: "m".into(),
            last_line: None,
            last_column: None,
        };
        let result = ValidationResult::Html(crate::domain::HtmlReport {
            messages: vec![msg("error"), msg("info"), msg("warning")],
        });
        assert_eq!(
            svc.score(&result),
            Contribution::Add {
                errors: 1,
                warnings: 2
            }
        );
    }

    #[test]
    fn generic_verdict_overwrites_error_total() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CSS_DIRTY.to_owned()));
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(GENERIC_FAILED.to_owned()));

        let (svc, rec) = service(Box::new(transport), cooldown(2), ServiceOptions::default());
        let tally = svc.run([&target("a.css"), &target("feed.rss")]);

        // 2 errors from the style sheet are replaced, not added to.
        assert_eq!(
            tally,
            Tally {
                errors: 1,
                warnings: 1
            }
        );
        assert!(rec.lines().contains(&GENERIC_FAILED.to_owned()));
    }

    #[test]
    fn generic_pass_resets_error_total() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CSS_DIRTY.to_owned()));
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(GENERIC_PASSED.to_owned()));

        let (svc, _) = service(Box::new(transport), cooldown(2), ServiceOptions::default());
        let tally = svc.run([&target("a.css"), &target("feed.rss")]);

        assert_eq!(tally.errors, 0);
        assert_eq!(tally.exit_code(), 0);
    }

    #[test]
    fn generic_verdict_accumulates_when_enabled() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CSS_DIRTY.to_owned()));
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(GENERIC_FAILED.to_owned()));

        let options = ServiceOptions {
            accumulate_generic: true,
            ..ServiceOptions::default()
        };
        let (svc, _) = service(Box::new(transport), cooldown(2), options);
        let tally = svc.run([&target("a.css"), &target("feed.rss")]);

        assert_eq!(tally.errors, 3);
    }

    // ── retry state machine ───────────────────────────────────────────────

    #[test]
    fn two_unparseable_answers_fail_without_third_attempt() {
        let (svc, rec) = service(
            answering("<html>busy</html>", 2),
            cooldown(2),
            ServiceOptions::default(),
        );
        let tally = svc.run([&target("a.css")]);

        assert_eq!(
            tally,
            Tally {
                errors: 1,
                warnings: 0
            }
        );
        assert_eq!(
            rec.lines(),
            vec!["validating: a.css ...", "retrying: a.css ...", "failed: a.css"]
        );
    }

    #[test]
    fn retry_recovers_on_second_attempt() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("not json".to_owned()));
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CSS_CLEAN.to_owned()));

        let (svc, _) = service(Box::new(transport), cooldown(2), ServiceOptions::default());
        assert_eq!(
            svc.validate(&target("a.css")),
            TargetOutcome::Scored(ValidationResult::Css(CssReport::default()))
        );
    }

    #[test]
    fn attempt_budget_is_configurable() {
        let options = ServiceOptions {
            max_attempts: 3,
            ..ServiceOptions::default()
        };
        let (svc, _) = service(answering("nope", 3), cooldown(3), options);
        assert_eq!(
            svc.validate(&target("a.css")),
            TargetOutcome::Failed(FailureReason::Unparseable { attempts: 3 })
        );
    }

    #[test]
    fn transport_failure_is_not_retried_and_batch_continues() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|req| {
                Err(TransportError::Request {
                    endpoint: req.endpoint.clone(),
                    reason: "connection refused".into(),
                })
            });
        transport
            .expect_execute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CSS_CLEAN.to_owned()));

        let (svc, rec) = service(Box::new(transport), cooldown(2), ServiceOptions::default());
        let tally = svc.run([&target("a.css"), &target("b.css")]);

        assert_eq!(tally.errors, 1);
        assert_eq!(
            rec.lines(),
            vec![
                "validating: a.css ...",
                "failed: a.css",
                "validating: b.css ...",
            ]
        );
    }

    // ── transport echo ────────────────────────────────────────────────────

    #[test]
    fn verbose_echoes_request_and_json_response() {
        let options = ServiceOptions {
            verbose: true,
            ..ServiceOptions::default()
        };
        let (svc, rec) = service(answering(CSS_CLEAN, 1), cooldown(1), options);
        svc.run([&target("http://x/a.css")]);

        let lines = rec.lines();
        assert!(lines[1].starts_with("GET https://jigsaw.w3.org/css-validator/validator uri="));
        assert_eq!(lines[2], CSS_CLEAN);
    }

    #[test]
    fn verbose_does_not_echo_generic_response_twice() {
        let options = ServiceOptions {
            verbose: true,
            ..ServiceOptions::default()
        };
        let (svc, rec) = service(answering(GENERIC_PASSED, 1), cooldown(1), options);
        svc.run([&target("notes.txt")]);

        let echoes = rec
            .lines()
            .iter()
            .filter(|l| l.as_str() == GENERIC_PASSED)
            .count();
        assert_eq!(echoes, 1);
    }

    #[test]
    fn request_reaches_transport_as_built() {
        let mut transport = MockTransport::new();
        transport
            .expect_execute()
            .withf(|req| {
                req.method == Method::MultipartPost
                    && req.upload.as_ref().is_some_and(|u| u.field == "uploaded_file")
            })
            .times(1)
            .returning(|_| Ok(r#"{"messages":[]}"#.to_owned()));

        let (svc, _) = service(Box::new(transport), cooldown(1), ServiceOptions::default());
        assert_eq!(svc.run([&target("index.htm")]), Tally::new());
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn zero_attempt_budget_rejected() {
        let options = ServiceOptions {
            max_attempts: 0,
            ..ServiceOptions::default()
        };
        let result = ValidationService::new(
            answering("", 0),
            cooldown(0),
            Box::new(Recorder::default()),
            options,
        );
        assert!(result.is_err());
    }

    #[test]
    fn identical_answers_give_identical_tallies() {
        let run = || {
            let (svc, _) = service(
                answering(HTML_ONE_ERROR, 2),
                cooldown(2),
                ServiceOptions::default(),
            );
            svc.run([&target("a.html"), &target("b.html")])
        };
        let first = run();
        let second = run();
        assert_eq!(first, second);
        assert_eq!(first.exit_code(), second.exit_code());
    }
}
