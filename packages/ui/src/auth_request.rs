//! Request state shared by the sign-in and sign-up forms.

use api::ApiError;

/// Whether a sign-in or sign-up call is in flight, and the inline error of
/// the last attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthRequest {
    pending: bool,
    error: Option<String>,
}

impl AuthRequest {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a request. Returns `false`, changing nothing, while one is
    /// already pending.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Show `message` without starting a request.
    pub fn reject(&mut self, message: impl Into<String>) {
        if !self.pending {
            self.error = Some(message.into());
        }
    }

    /// End the pending request, keeping its error for display.
    pub fn finish<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        self.pending = false;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("auth request failed: {e}");
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused_while_pending() {
        let mut request = AuthRequest::default();
        assert!(request.begin());
        assert!(!request.begin());
        assert!(request.is_pending());

        assert_eq!(request.finish(Ok(7)), Some(7));
        assert!(!request.is_pending());
        assert!(request.begin());
    }

    #[test]
    fn test_failure_keeps_error_until_next_attempt() {
        let mut request = AuthRequest::default();
        request.begin();
        assert_eq!(request.finish::<()>(Err(ApiError::InvalidCredentials)), None);
        assert_eq!(request.error(), Some("Invalid email or password."));

        request.begin();
        assert!(request.error().is_none());
    }

    #[test]
    fn test_reject_ignored_while_pending() {
        let mut request = AuthRequest::default();
        request.reject("Passwords don't match!");
        assert_eq!(request.error(), Some("Passwords don't match!"));

        request.begin();
        request.reject("Name is required.");
        assert!(request.error().is_none());
    }
}
