//! Password security assessment library
//!
//! This library derives three views from the same character analysis of a
//! password: a security classification with a visual indicator, a strength
//! validation with per-criterion feedback, and a live checklist for UI
//! feedback while the user types.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serializes results and the JSON response envelope
//!
//! # Environment Variables
//!
//! - `PWD_DEBOUNCE_MS`: Debounce delay for live assessment
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use pwd_assessment::{classify_password_security, validate_password_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd123".to_string().into());
//!
//! let classification = classify_password_security(&password);
//! assert_eq!(classification.security_level, StrengthLevel::Forte);
//!
//! let validation = validate_password_strength(&password);
//! println!("{}: {}", validation.strength_level, validation.feedback_message);
//! ```

// Internal modules
mod analysis;
mod classifier;
mod config;
mod evaluator;
mod feedback;
mod input;
#[cfg(feature = "serde")]
mod response;
mod rules;
mod sections;
mod strategy;
mod validator;

// Public API
pub use analysis::{CharClass, CharacterAnalysis, MIN_RECOMMENDED_LENGTH};
pub use classifier::{ClassificationResult, Indicator, classify_password_security};
pub use config::{DEBOUNCE_ENV, DEFAULT_DEBOUNCE, get_debounce_delay};
pub use evaluator::{Assessment, AssessmentKind, assess_password};
pub use feedback::{FeedbackCriterion, get_password_validation_feedback};
pub use input::{InputError, MAX_INPUT_LENGTH, MIN_INPUT_LENGTH, PasswordInput};
pub use rules::{OTHERWISE, RuleChain, TierRule};
pub use sections::{CriteriaItem, CriterionOutcome};
pub use strategy::{ScoringBreakdown, ScoringStrategy, StrengthLevel, TierAssessment};
pub use validator::{ValidationResult, color_code, feedback_message, validate_password_strength};

#[cfg(feature = "async")]
pub use evaluator::assess_password_tx;

#[cfg(feature = "serde")]
pub use response::{ApiResponse, ErrorBody};
