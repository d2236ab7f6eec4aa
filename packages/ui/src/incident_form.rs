//! State machine behind the incident report form.
//!
//! ```text
//! Editing --begin_submit--> Submitting --finish_submit(ok)--> Closed
//!    ^                          |
//!    +---finish_submit(err)-----+
//! ```
//!
//! Validation runs in [`IncidentForm::begin_submit`], before any payload
//! exists, so an invalid form never reaches the backend.

use api::{ApiError, ReportPayload, ReportResponse};
use store::Severity;

use crate::FormError;

const FALLBACK_FAILURE: &str = "Failed to report incident.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Closed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentForm {
    pub description: String,
    pub location: String,
    pub severity: Severity,
    phase: FormPhase,
    error: Option<String>,
}

impl IncidentForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Inline error from the last validation or submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Validate and move to `Submitting`, returning the payload to send.
    pub fn begin_submit(&mut self) -> Result<ReportPayload, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        let payload = ReportPayload::new(
            self.description.trim(),
            self.location.trim(),
            self.severity,
        );
        if let Err(e) = payload.validate() {
            let message = e.to_string();
            self.error = Some(message.clone());
            self.phase = FormPhase::Editing;
            return Err(FormError::Validation(message));
        }
        self.error = None;
        self.phase = FormPhase::Submitting;
        Ok(payload)
    }

    /// Apply the backend's answer. Returns the success message to broadcast,
    /// or `None` when the form stays open with an inline error.
    pub fn finish_submit(&mut self, result: Result<ReportResponse, ApiError>) -> Option<String> {
        if !self.is_submitting() {
            tracing::warn!(phase = ?self.phase, "report result arrived outside a submission");
            return None;
        }
        match result {
            Ok(response) if response.success => {
                *self = Self {
                    phase: FormPhase::Closed,
                    ..Self::default()
                };
                Some(response.message)
            }
            Ok(response) => {
                let message = if response.message.is_empty() {
                    FALLBACK_FAILURE.to_string()
                } else {
                    response.message
                };
                self.fail(message);
                None
            }
            Err(e) => {
                tracing::error!("reporting error: {e}");
                self.fail(e.to_string());
                None
            }
        }
    }

    /// Clear every field and return to `Editing`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use api::{
        Alert, Credentials, MockBackend, RiskArea, SafetyBackend, SignupRequest, Tip, User,
        REPORT_ACCEPTED_MESSAGE,
    };
    use store::{ApiConfig, SeedStore};

    use super::*;

    fn filled() -> IncidentForm {
        IncidentForm {
            description: "Suspicious activity".to_string(),
            location: "5th & Main".to_string(),
            severity: Severity::High,
            ..IncidentForm::default()
        }
    }

    /// Counts report calls, delegating everything to an instant mock.
    struct CountingBackend {
        inner: MockBackend,
        reports: Cell<usize>,
    }

    impl CountingBackend {
        fn new() -> Self {
            Self {
                inner: MockBackend::new(SeedStore::default(), ApiConfig::instant()),
                reports: Cell::new(0),
            }
        }
    }

    impl SafetyBackend for CountingBackend {
        async fn fetch_alerts(&self) -> Result<Vec<Alert>, ApiError> {
            self.inner.fetch_alerts().await
        }

        async fn fetch_tips(&self) -> Result<Vec<Tip>, ApiError> {
            self.inner.fetch_tips().await
        }

        async fn fetch_risk_areas(&self) -> Result<Vec<RiskArea>, ApiError> {
            self.inner.fetch_risk_areas().await
        }

        async fn report_incident(&self, payload: ReportPayload) -> Result<ReportResponse, ApiError> {
            self.reports.set(self.reports.get() + 1);
            self.inner.report_incident(payload).await
        }

        async fn sign_in(&self, credentials: Credentials) -> Result<User, ApiError> {
            self.inner.sign_in(credentials).await
        }

        async fn sign_up(&self, request: SignupRequest) -> Result<String, ApiError> {
            self.inner.sign_up(request).await
        }
    }

    /// The same sequence the modal runs on submit.
    async fn submit(form: &mut IncidentForm, backend: &impl SafetyBackend) -> Option<String> {
        let payload = form.begin_submit().ok()?;
        let result = backend.report_incident(payload).await;
        form.finish_submit(result)
    }

    #[test]
    fn test_defaults() {
        let form = IncidentForm::default();
        assert_eq!(form.severity, Severity::Medium);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.error().is_none());
    }

    #[tokio::test]
    async fn test_empty_description_never_reaches_backend() {
        let backend = CountingBackend::new();
        let mut form = IncidentForm {
            description: String::new(),
            ..filled()
        };

        assert_eq!(submit(&mut form, &backend).await, None);
        assert_eq!(backend.reports.get(), 0);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(), Some("Description is required."));
    }

    #[tokio::test]
    async fn test_successful_submit_closes_and_clears() {
        let backend = CountingBackend::new();
        let mut form = filled();

        let message = submit(&mut form, &backend).await;
        assert_eq!(message.as_deref(), Some(REPORT_ACCEPTED_MESSAGE));
        assert_eq!(backend.reports.get(), 1);
        assert_eq!(form.phase(), FormPhase::Closed);
        assert!(form.description.is_empty());
        assert!(form.location.is_empty());
        assert_eq!(form.severity, Severity::Medium);
    }

    #[test]
    fn test_submit_disabled_while_submitting() {
        let mut form = filled();
        assert!(form.begin_submit().is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
    }

    #[test]
    fn test_backend_error_keeps_form_open() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let outcome = form.finish_submit(Err(ApiError::Unavailable("offline".to_string())));

        assert!(outcome.is_none());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.error(), Some("Service unavailable: offline"));
        assert_eq!(form.description, "Suspicious activity");
    }

    #[test]
    fn test_rejected_response_uses_fallback_message() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.finish_submit(Ok(ReportResponse::rejected(""))).is_none());
        assert_eq!(form.error(), Some("Failed to report incident."));

        form.begin_submit().unwrap();
        assert!(form.error().is_none());
        form.finish_submit(Ok(ReportResponse::rejected("Duplicate report")));
        assert_eq!(form.error(), Some("Duplicate report"));
    }

    #[test]
    fn test_late_result_ignored_after_reset() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.reset();
        assert!(form.finish_submit(Ok(ReportResponse::accepted())).is_none());
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
