use log::{info, warn};
use thiserror::Error;

pub const DEMO_EMAIL: &str = "admin@demo.com";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no account registered for `{0}`")]
    UnknownUser(String),
    #[error("invalid password for `{0}`")]
    InvalidPassword(String),
}

/// The single account accepted by the login stub.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn demo() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }

    /// Exact string comparison, no normalisation.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email != self.email {
            return Err(AuthError::UnknownUser(email.to_string()));
        }
        if password != self.password {
            return Err(AuthError::InvalidPassword(email.to_string()));
        }
        Ok(())
    }
}

/// Who is signed in. Starts unauthenticated; `logout` returns it there.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    user_email: Option<String>,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            user_email: None,
        }
    }

    pub fn login(&mut self, email: &str, password: &str) -> bool {
        match self.credentials.verify(email, password) {
            Ok(()) => {
                info!("signed in as {}", email);
                self.user_email = Some(email.to_string());
                true
            }
            Err(e) => {
                warn!("login rejected: {}", e);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(email) = self.user_email.take() {
            info!("{} signed out", email);
        }
    }

    pub fn current_user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_email.is_some()
    }

    /// Avatar fallback: first letter of the email, upper-cased.
    pub fn initial(&self) -> String {
        self.user_email
            .as_deref()
            .and_then(|email| email.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "JD".to_string())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Credentials::demo())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_user_email(), None);
    }

    #[test]
    fn test_login_with_demo_credentials() {
        let mut session = Session::default();

        assert!(session.login("admin@demo.com", "demo123"));
        assert_eq!(session.current_user_email(), Some("admin@demo.com"));
        assert_eq!(session.initial(), "A");
    }

    #[test]
    fn test_login_rejects_other_pairs() {
        let mut session = Session::default();

        for (email, password) in [
            ("admin@demo.com", "wrong"),
            ("someone@demo.com", "demo123"),
            ("Admin@demo.com", "demo123"),
            ("admin@demo.com ", "demo123"),
            ("", ""),
        ] {
            assert!(!session.login(email, password), "{:?}/{:?} should be rejected", email, password);
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn test_verify_reports_which_part_failed() {
        let creds = Credentials::demo();

        assert_eq!(creds.verify("x@y.z", "demo123"), Err(AuthError::UnknownUser("x@y.z".to_string())));
        assert_eq!(
            creds.verify("admin@demo.com", "nope"),
            Err(AuthError::InvalidPassword("admin@demo.com".to_string()))
        );
        assert_eq!(creds.verify(DEMO_EMAIL, DEMO_PASSWORD), Ok(()));
    }

    #[test]
    fn test_logout_clears_user() {
        let mut session = Session::default();
        session.login(DEMO_EMAIL, DEMO_PASSWORD);

        session.logout();
        assert_eq!(session.current_user_email(), None);
        assert_eq!(session.initial(), "JD");

        // Logging out twice is harmless
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_existing_user() {
        let mut session = Session::default();
        session.login(DEMO_EMAIL, DEMO_PASSWORD);

        assert!(!session.login(DEMO_EMAIL, "bad"));
        assert_eq!(session.current_user_email(), Some(DEMO_EMAIL));
    }
}
