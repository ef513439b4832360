//! Live checklist feedback for incremental typing.

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::CharClass;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FeedbackCriterion {
    pub criterion: &'static str,
    pub met: bool,
}

const CHECKLIST: [(&str, fn(&str) -> bool); 5] = [
    ("Pelo menos 4 caracteres", |p| p.chars().count() >= 4),
    ("Conter letras maiúsculas (A-Z)", |p| CharClass::Uppercase.any_in(p)),
    ("Conter letras minúsculas (a-z)", |p| CharClass::Lowercase.any_in(p)),
    ("Conter números (0-9)", |p| CharClass::Digit.any_in(p)),
    ("Conter caracteres especiais (!@#)", |p| {
        CharClass::FeedbackSpecial.any_in(p)
    }),
];

/// Tests the raw, untrimmed password against the fixed checklist.
///
/// Always returns five entries in the same order; the empty string is
/// accepted and meets nothing.
pub fn get_password_validation_feedback(password: &SecretString) -> Vec<FeedbackCriterion> {
    let pwd = password.expose_secret();
    CHECKLIST
        .iter()
        .map(|&(criterion, test)| FeedbackCriterion {
            criterion,
            met: test(pwd),
        })
        .collect()
}
