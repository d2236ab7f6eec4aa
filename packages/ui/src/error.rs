//! Errors raised inside the UI layer.

/// A hook was called outside the provider that supplies its context.
/// This is a wiring defect, not a runtime condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContextError {
    #[error("{0} is not mounted above this component")]
    MissingProvider(&'static str),
}

/// Why a form refused to submit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Validation(String),

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Why the device position could not be read.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("geolocation is not available on this platform")]
    Unsupported,

    #[error("position request failed: {0}")]
    Denied(String),
}
