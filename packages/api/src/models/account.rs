//! Sign-in and sign-up requests.

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Email and password submitted by the login form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Fields submitted by the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required.".to_string()));
        }
        if !self.email.contains('@') {
            return Err(ApiError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation("Password is required.".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::Validation("Passwords don't match!".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SignupRequest {
        SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    #[test]
    fn test_valid_signup() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_password_mismatch() {
        let mut req = request();
        req.confirm_password = "other".to_string();
        assert_eq!(
            req.validate(),
            Err(ApiError::Validation("Passwords don't match!".to_string()))
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());

        let mut req = request();
        req.name = " ".to_string();
        assert!(req.validate().is_err());
    }
}
