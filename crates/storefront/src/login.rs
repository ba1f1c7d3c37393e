//! Login form validation.
//!
//! The storefront has no account backend; the login modal only validates
//! input shape. Errors are surfaced inline next to the form and block the
//! submit, recoverable by resubmission. Password is checked before email,
//! matching the form's original validation order.

use thiserror::Error;

use trailcase_core::{Email, EmailError};

/// Validation errors for the login form.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The password field is empty.
    #[error("enter your password")]
    MissingPassword,
    /// The email field does not hold a plausible address.
    #[error("enter a valid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Raw login form input, as typed.
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Email field contents.
    pub email: String,
    /// Password field contents.
    pub password: String,
}

impl LoginForm {
    /// Validate the form, returning the parsed email on success.
    ///
    /// Both fields are trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::MissingPassword`] for a blank password, or
    /// [`LoginError::InvalidEmail`] when the email fails shape checks.
    pub fn validate(&self) -> Result<Email, LoginError> {
        if self.password.trim().is_empty() {
            return Err(LoginError::MissingPassword);
        }

        Ok(Email::parse(self.email.trim())?)
    }
}
