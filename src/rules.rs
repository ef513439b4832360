//! Ordered tier rule chains.
//!
//! Rules are evaluated in sequence and the first match wins, so a broad rule
//! placed after a narrow one only sees the inputs the narrow one rejected.

use crate::analysis::CharacterAnalysis;

/// Name reported when no rule of a chain matched.
pub const OTHERWISE: &str = "otherwise";

/// A named predicate over the analysis and the outcome it selects.
#[derive(Debug, Clone, Copy)]
pub struct TierRule<T> {
    pub name: &'static str,
    pub applies: fn(&CharacterAnalysis) -> bool,
    pub outcome: T,
}

/// An ordered list of rules plus the outcome used when none applies.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain<T: 'static> {
    pub rules: &'static [TierRule<T>],
    pub otherwise: T,
}

impl<T: Copy + 'static> RuleChain<T> {
    /// Returns the name and outcome of the first applicable rule.
    pub fn select(&self, analysis: &CharacterAnalysis) -> (&'static str, T) {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(analysis))
            .map(|rule| (rule.name, rule.outcome))
            .unwrap_or((OTHERWISE, self.otherwise))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RULES: [TierRule<u8>; 2] = [
        TierRule {
            name: "short",
            applies: |a| a.length < 8,
            outcome: 1,
        },
        TierRule {
            name: "any-lowercase",
            applies: |a| a.has_lowercase,
            outcome: 2,
        },
    ];

    static CHAIN: RuleChain<u8> = RuleChain {
        rules: &RULES,
        otherwise: 0,
    };

    #[test]
    fn test_first_matching_rule_wins() {
        // Both rules apply; the earlier one is selected.
        let analysis = CharacterAnalysis::of("abc");
        assert_eq!(CHAIN.select(&analysis), ("short", 1));
    }

    #[test]
    fn test_later_rule_selected_when_earlier_rejects() {
        let analysis = CharacterAnalysis::of("abcdefghij");
        assert_eq!(CHAIN.select(&analysis), ("any-lowercase", 2));
    }

    #[test]
    fn test_chain_is_copyable_static_value() {
        let copy = CHAIN;
        assert_eq!(copy.rules.len(), 2);
        assert_eq!(copy.select(&CharacterAnalysis::of("")), ("short", 1));
    }

    #[test]
    fn test_otherwise_when_nothing_applies() {
        let analysis = CharacterAnalysis::of("ABCDEFGHIJ");
        assert_eq!(CHAIN.select(&analysis), (OTHERWISE, 0));
    }
}
