//! Security classification with a visual indicator.

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::CharacterAnalysis;
use crate::strategy::{self, ScoringBreakdown, StrengthLevel};

/// Minimum length at which the indicator is displayed.
const INDICATOR_MIN_LENGTH: usize = 4;

/// Color and fill of the strength bar for a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub color: &'static str,
    /// Percentage fill, one of 25, 50, 75 or 100.
    pub size: u8,
}

impl Indicator {
    pub fn for_level(level: StrengthLevel) -> Self {
        let (color, size) = match level {
            StrengthLevel::Fraca => ("#FF0000", 25),
            StrengthLevel::Media => ("#FFFF00", 50),
            StrengthLevel::Forte => ("#00FF00", 75),
            StrengthLevel::MuitoForte => ("#006400", 100),
        };
        Self { color, size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClassificationResult {
    pub security_level: StrengthLevel,
    pub security_score: u8,
    pub color_indicator: &'static str,
    pub indicator_size: u8,
    pub show_indicator: bool,
    pub criteria_analysis: CharacterAnalysis,
    pub scoring_breakdown: ScoringBreakdown,
}

/// Classifies a password into a security level using point-sum scoring.
///
/// The password is trimmed before analysis. Length bounds are the caller's
/// concern (see [`crate::PasswordInput`]); any string yields a result.
pub fn classify_password_security(password: &SecretString) -> ClassificationResult {
    let analysis = CharacterAnalysis::trimmed(password.expose_secret());
    let (tier, breakdown) = strategy::point_sum(&analysis);
    let indicator = Indicator::for_level(tier.level);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "classified password: level={} score={} rule={}",
        tier.level,
        tier.score,
        tier.rule
    );

    ClassificationResult {
        security_level: tier.level,
        security_score: tier.score,
        color_indicator: indicator.color,
        indicator_size: indicator.size,
        show_indicator: analysis.length >= INDICATOR_MIN_LENGTH,
        criteria_analysis: analysis,
        scoring_breakdown: breakdown,
    }
}
