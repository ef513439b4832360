//! Boundary validation of incoming passwords.
//!
//! Classification and validation require 4 to 100 characters; the live
//! feedback accepts anything up to 100 characters, including nothing at all.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::classifier::{ClassificationResult, classify_password_security};
use crate::feedback::{FeedbackCriterion, get_password_validation_feedback};
use crate::validator::{ValidationResult, validate_password_strength};

pub const MIN_INPUT_LENGTH: usize = 4;
pub const MAX_INPUT_LENGTH: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("A senha deve ter pelo menos 4 caracteres para ser analisada")]
    TooShort(usize),
    #[error("A senha não deve exceder 100 caracteres")]
    TooLong(usize),
}

impl InputError {
    /// Machine-readable error code reported to clients.
    pub fn code(&self) -> &'static str {
        "VALIDATION_ERROR"
    }
}

/// A password that passed the boundary checks.
pub struct PasswordInput(SecretString);

impl PasswordInput {
    /// Accepts a password for classification or validation.
    ///
    /// # Errors
    ///
    /// Returns error if the raw password has fewer than 4 or more than
    /// 100 characters.
    pub fn for_assessment(password: SecretString) -> Result<Self, InputError> {
        let length = password.expose_secret().chars().count();
        if length < MIN_INPUT_LENGTH {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected password input: {} characters", length);
            return Err(InputError::TooShort(length));
        }
        Self::within_max(password, length)
    }

    /// Accepts a password for live feedback. A missing password is empty.
    ///
    /// # Errors
    ///
    /// Returns error if the password has more than 100 characters.
    pub fn for_feedback(password: Option<SecretString>) -> Result<Self, InputError> {
        let password = password.unwrap_or_else(|| SecretString::new(String::new().into()));
        let length = password.expose_secret().chars().count();
        Self::within_max(password, length)
    }

    fn within_max(password: SecretString, length: usize) -> Result<Self, InputError> {
        if length > MAX_INPUT_LENGTH {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected password input: {} characters", length);
            return Err(InputError::TooLong(length));
        }
        Ok(Self(password))
    }

    pub fn classify(&self) -> ClassificationResult {
        classify_password_security(&self.0)
    }

    pub fn validate(&self) -> ValidationResult {
        validate_password_strength(&self.0)
    }

    pub fn feedback(&self) -> Vec<FeedbackCriterion> {
        get_password_validation_feedback(&self.0)
    }

    pub fn as_secret(&self) -> &SecretString {
        &self.0
    }
}
