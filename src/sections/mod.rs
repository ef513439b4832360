//! Password criteria sections
//!
//! Each section checks one criterion of the validator and reports it as met
//! or missing, with the text shown to the user.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{lowercase_section, number_section, special_section, uppercase_section};

use crate::analysis::CharacterAnalysis;

/// A criterion label with its description (when met) or suggestion (when missing).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CriteriaItem {
    pub criterion: String,
    pub description: String,
}

/// Result of a single criterion section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionOutcome {
    Met(CriteriaItem),
    Missing(CriteriaItem),
}

impl CriterionOutcome {
    pub(crate) fn new(met: bool, criterion: &str, description: String, suggestion: String) -> Self {
        let criterion = criterion.to_string();
        if met {
            CriterionOutcome::Met(CriteriaItem { criterion, description })
        } else {
            CriterionOutcome::Missing(CriteriaItem {
                criterion,
                description: suggestion,
            })
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, CriterionOutcome::Met(_))
    }
}

/// Signature shared by all criterion sections.
pub type Section = fn(&CharacterAnalysis) -> CriterionOutcome;

/// Criterion sections in reporting order.
pub const SECTIONS: [(&str, Section); 5] = [
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("number", number_section),
    ("special", special_section),
    ("length", length_section),
];
