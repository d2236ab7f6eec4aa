//! Errors returned by [`crate::SafetyBackend`] operations.

/// Every way a backend call can fail.
///
/// The mock backend only produces [`ApiError::Validation`] and
/// [`ApiError::InvalidCredentials`] by default; [`ApiError::Unavailable`] is
/// reached through the fault seam in [`crate::fault`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
