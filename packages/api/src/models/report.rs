//! # Incident reports
//!
//! [`ReportPayload`] is what the incident form submits; [`ReportResponse`] is
//! what the backend answers. A response with `success: false` is a valid
//! answer (the report was received but rejected) and is distinct from an
//! [`ApiError`], which means the call itself failed.

use serde::{Deserialize, Serialize};
use store::Severity;

use crate::ApiError;

/// Message returned for every accepted report.
pub const REPORT_ACCEPTED_MESSAGE: &str = "Incident reported successfully!";

/// Payload for reporting an incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub description: String,
    /// Address, landmark, or coordinates as text.
    pub location: String,
    pub severity: Severity,
}

impl ReportPayload {
    pub fn new(description: impl Into<String>, location: impl Into<String>, severity: Severity) -> Self {
        Self {
            description: description.into(),
            location: location.into(),
            severity,
        }
    }

    /// Both text fields must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.description.trim().is_empty() {
            return Err(ApiError::Validation("Description is required.".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(ApiError::Validation("Location is required.".to_string()));
        }
        Ok(())
    }
}

/// Backend answer to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub success: bool,
    pub message: String,
}

impl ReportResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: REPORT_ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
