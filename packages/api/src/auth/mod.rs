//! Mock account directory used by [`crate::MockBackend::sign_in`].
//!
//! There is exactly one account. The password comparison is plain equality;
//! nothing here is meant to protect real credentials.

use store::User;

use crate::Credentials;

/// Email of the demo account.
pub const DEMO_EMAIL: &str = "test@example.com";
/// Password of the demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Resolve credentials to a user, or `None` if they do not match the demo account.
pub fn authenticate(credentials: &Credentials) -> Option<User> {
    if credentials.email.trim() != DEMO_EMAIL || credentials.password != DEMO_PASSWORD {
        return None;
    }
    Some(User {
        id: "user123".to_string(),
        name: "Test User".to_string(),
        email: DEMO_EMAIL.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_account() {
        let user = authenticate(&Credentials::new(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
        assert_eq!(user.id, "user123");
        assert_eq!(user.name, "Test User");
    }

    #[test]
    fn test_wrong_password() {
        assert!(authenticate(&Credentials::new(DEMO_EMAIL, "hunter2")).is_none());
        assert!(authenticate(&Credentials::new("other@example.com", DEMO_PASSWORD)).is_none());
    }

    #[test]
    fn test_password_must_match_exactly() {
        for attempt in ["", "pass", "password ", "Password", "passwords"] {
            assert!(authenticate(&Credentials::new(DEMO_EMAIL, attempt)).is_none(), "{attempt:?}");
        }
        let padded_email = format!("  {DEMO_EMAIL} ");
        assert!(authenticate(&Credentials::new(padded_email, DEMO_PASSWORD)).is_some());
    }
}
