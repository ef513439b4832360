//! Scoring policies.
//!
//! Both policies grade the same [`CharacterAnalysis`] into the same four
//! levels, but with their own tier boundaries and their own arithmetic.
//! They can disagree for a given password and are kept separate on purpose.

use std::fmt;

use crate::analysis::CharacterAnalysis;
use crate::rules::{RuleChain, TierRule};

/// Four-level strength taxonomy, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrengthLevel {
    #[cfg_attr(feature = "serde", serde(rename = "Fraca"))]
    Fraca,
    #[cfg_attr(feature = "serde", serde(rename = "Média"))]
    Media,
    #[cfg_attr(feature = "serde", serde(rename = "Forte"))]
    Forte,
    #[cfg_attr(feature = "serde", serde(rename = "Muito Forte"))]
    MuitoForte,
}

impl StrengthLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::Fraca => "Fraca",
            StrengthLevel::Media => "Média",
            StrengthLevel::Forte => "Forte",
            StrengthLevel::MuitoForte => "Muito Forte",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level and score produced by a [`ScoringStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierAssessment {
    pub level: StrengthLevel,
    pub score: u8,
    /// Name of the rule that selected the level.
    pub rule: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Discrete point sums per criterion, used by the classifier.
    PointSum,
    /// Linear interpolation inside each tier, used by the validator.
    Interpolated,
}

impl ScoringStrategy {
    pub fn assess(self, analysis: &CharacterAnalysis) -> TierAssessment {
        match self {
            ScoringStrategy::PointSum => point_sum(analysis).0,
            ScoringStrategy::Interpolated => {
                let (rule, tier) = INTERPOLATED_CHAIN.select(analysis);
                TierAssessment {
                    level: tier.level,
                    score: finalize_score((tier.score)(analysis)),
                    rule,
                }
            }
        }
    }
}

/// Point-sum assessment together with the breakdown its score comes from.
pub(crate) fn point_sum(analysis: &CharacterAnalysis) -> (TierAssessment, ScoringBreakdown) {
    let (rule, level) = POINT_SUM_CHAIN.select(analysis);
    let breakdown = ScoringBreakdown::of(analysis);
    let tier = TierAssessment {
        level,
        score: breakdown.total_score,
        rule,
    };
    (tier, breakdown)
}

/// Clamps to `[0, 100]` and rounds to the nearest integer.
fn finalize_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

// ---------------------------------------------------------------------------
// Point sum
// ---------------------------------------------------------------------------

/// Individual point contributions of the point-sum policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoringBreakdown {
    pub length_points: u8,
    pub uppercase_points: u8,
    pub lowercase_points: u8,
    pub number_points: u8,
    pub special_points: u8,
    pub diversity_points: u8,
    pub total_score: u8,
}

impl ScoringBreakdown {
    pub fn of(analysis: &CharacterAnalysis) -> Self {
        let length_points = analysis.length.min(25) as u8;
        let uppercase_points = class_points(analysis.uppercase_count);
        let lowercase_points = class_points(analysis.lowercase_count);
        let number_points = class_points(analysis.number_count);
        let special_points: u8 = match analysis.special_count {
            0 => 0,
            1 => 15,
            _ => 20,
        };
        let diversity_points: u8 = match analysis.character_types {
            5 => 25,
            4 => 20,
            3 => 15,
            2 => 10,
            _ => 0,
        };

        let mut total = u32::from(length_points)
            + u32::from(uppercase_points)
            + u32::from(lowercase_points)
            + u32::from(number_points)
            + u32::from(special_points)
            + u32::from(diversity_points);
        // A single criterion never scores above the weak band.
        if analysis.character_types == 1 {
            total = total.min(25);
        }

        Self {
            length_points,
            uppercase_points,
            lowercase_points,
            number_points,
            special_points,
            diversity_points,
            total_score: finalize_score(f64::from(total)),
        }
    }
}

fn class_points(count: usize) -> u8 {
    match count {
        0 => 0,
        1 | 2 => 10,
        _ => 15,
    }
}

fn ps_single_type_or_short(a: &CharacterAnalysis) -> bool {
    a.character_types == 1 || ((4..=7).contains(&a.length) && a.criteria_count <= 2)
}

fn medium_band(a: &CharacterAnalysis) -> bool {
    (2..=3).contains(&a.criteria_count) && (8..=11).contains(&a.length)
}

fn four_criteria_long(a: &CharacterAnalysis) -> bool {
    a.criteria_count == 4 && a.length >= 12
}

fn five_criteria_very_long(a: &CharacterAnalysis) -> bool {
    a.criteria_count == 5 && a.length >= 16
}

fn four_plus_criteria_long(a: &CharacterAnalysis) -> bool {
    a.criteria_count >= 4 && a.length >= 12
}

static POINT_SUM_RULES: [TierRule<StrengthLevel>; 5] = [
    TierRule {
        name: "single-type-or-short",
        applies: ps_single_type_or_short,
        outcome: StrengthLevel::Fraca,
    },
    TierRule {
        name: "medium-band",
        applies: medium_band,
        outcome: StrengthLevel::Media,
    },
    TierRule {
        name: "four-criteria-long",
        applies: four_criteria_long,
        outcome: StrengthLevel::Forte,
    },
    TierRule {
        name: "five-criteria-very-long",
        applies: five_criteria_very_long,
        outcome: StrengthLevel::MuitoForte,
    },
    TierRule {
        name: "four-plus-criteria-long",
        applies: four_plus_criteria_long,
        outcome: StrengthLevel::Forte,
    },
];

static POINT_SUM_CHAIN: RuleChain<StrengthLevel> = RuleChain {
    rules: &POINT_SUM_RULES,
    otherwise: StrengthLevel::Media,
};

// ---------------------------------------------------------------------------
// Interpolated
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct InterpolatedTier {
    level: StrengthLevel,
    score: fn(&CharacterAnalysis) -> f64,
}

fn ip_few_criteria_or_short(a: &CharacterAnalysis) -> bool {
    a.criteria_count <= 1 || ((4..=7).contains(&a.length) && a.criteria_count <= 2)
}

fn criteria(a: &CharacterAnalysis) -> f64 {
    a.criteria_count as f64
}

fn length(a: &CharacterAnalysis) -> f64 {
    a.length as f64
}

fn weak_score(a: &CharacterAnalysis) -> f64 {
    (criteria(a) / 5.0 * 25.0 + length(a) / 100.0 * 25.0).min(25.0)
}

fn medium_band_score(a: &CharacterAnalysis) -> f64 {
    26.0 + (criteria(a) - 2.0) / 3.0 * 24.0 + (length(a) - 8.0) / 4.0 * 10.0
}

fn four_criteria_score(a: &CharacterAnalysis) -> f64 {
    51.0 + (length(a) - 12.0) / 4.0 * 24.0
}

fn very_strong_score(a: &CharacterAnalysis) -> f64 {
    76.0 + ((length(a) - 16.0) / 10.0 * 24.0).min(24.0)
}

fn four_plus_criteria_score(a: &CharacterAnalysis) -> f64 {
    51.0 + (criteria(a) - 4.0) * 12.0 + (length(a) - 12.0) / 8.0 * 12.0
}

fn medium_fallback_score(a: &CharacterAnalysis) -> f64 {
    26.0 + criteria(a) / 5.0 * 24.0
}

static INTERPOLATED_RULES: [TierRule<InterpolatedTier>; 5] = [
    TierRule {
        name: "few-criteria-or-short",
        applies: ip_few_criteria_or_short,
        outcome: InterpolatedTier {
            level: StrengthLevel::Fraca,
            score: weak_score,
        },
    },
    TierRule {
        name: "medium-band",
        applies: medium_band,
        outcome: InterpolatedTier {
            level: StrengthLevel::Media,
            score: medium_band_score,
        },
    },
    TierRule {
        name: "four-criteria-long",
        applies: four_criteria_long,
        outcome: InterpolatedTier {
            level: StrengthLevel::Forte,
            score: four_criteria_score,
        },
    },
    TierRule {
        name: "five-criteria-very-long",
        applies: five_criteria_very_long,
        outcome: InterpolatedTier {
            level: StrengthLevel::MuitoForte,
            score: very_strong_score,
        },
    },
    TierRule {
        name: "four-plus-criteria-long",
        applies: four_plus_criteria_long,
        outcome: InterpolatedTier {
            level: StrengthLevel::Forte,
            score: four_plus_criteria_score,
        },
    },
];

static INTERPOLATED_CHAIN: RuleChain<InterpolatedTier> = RuleChain {
    rules: &INTERPOLATED_RULES,
    otherwise: InterpolatedTier {
        level: StrengthLevel::Media,
        score: medium_fallback_score,
    },
};
