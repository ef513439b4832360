//! Assessment dispatch - synchronous and debounced live evaluation.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classifier::{ClassificationResult, classify_password_security};
use crate::feedback::{FeedbackCriterion, get_password_validation_feedback};
use crate::validator::{ValidationResult, validate_password_strength};

/// Which view of the password to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentKind {
    Classification,
    Validation,
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment {
    Classification(ClassificationResult),
    Validation(ValidationResult),
    Feedback(Vec<FeedbackCriterion>),
}

/// Computes the requested assessment of `password`.
pub fn assess_password(password: &SecretString, kind: AssessmentKind) -> Assessment {
    match kind {
        AssessmentKind::Classification => {
            Assessment::Classification(classify_password_security(password))
        }
        AssessmentKind::Validation => Assessment::Validation(validate_password_strength(password)),
        AssessmentKind::Feedback => Assessment::Feedback(get_password_validation_feedback(password)),
    }
}

/// Debounced version that sends the assessment via channel.
///
/// Waits the configured debounce delay (see [`crate::get_debounce_delay`]).
/// If `token` is cancelled before the wait ends, typically because a newer
/// keystroke superseded this one, nothing is sent.
#[cfg(feature = "async")]
pub async fn assess_password_tx(
    password: &SecretString,
    kind: AssessmentKind,
    token: CancellationToken,
    tx: mpsc::Sender<Assessment>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("{:?} assessment is about to start...", kind);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("{:?} assessment cancelled during debounce", kind);
            return;
        }
        _ = tokio::time::sleep(crate::config::get_debounce_delay()) => {}
    }

    let assessment = assess_password(password, kind);

    if let Err(e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
