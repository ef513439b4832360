//! Strength validation with per-criterion feedback.

use secrecy::{ExposeSecret, SecretString};

use crate::analysis::CharacterAnalysis;
use crate::sections::{CriteriaItem, CriterionOutcome, SECTIONS};
use crate::strategy::{ScoringStrategy, StrengthLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationResult {
    pub strength_level: StrengthLevel,
    pub score: u8,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_special_chars: bool,
    pub length: usize,
    pub criteria_count: usize,
    pub met_criteria: Vec<CriteriaItem>,
    pub missing_criteria: Vec<CriteriaItem>,
    pub feedback_message: &'static str,
    pub color_code: &'static str,
}

/// Message shown to the user for each level.
pub fn feedback_message(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::Fraca => {
            "Sua senha é fraca e pode ser facilmente comprometida. Considere adicionar mais tipos de caracteres e aumentar o comprimento."
        }
        StrengthLevel::Media => {
            "Sua senha tem segurança média. Para melhorar, adicione mais tipos de caracteres e aumente o comprimento para pelo menos 12 caracteres."
        }
        StrengthLevel::Forte => {
            "Sua senha é forte e oferece boa proteção. Para segurança máxima, considere aumentar o comprimento para 16 ou mais caracteres."
        }
        StrengthLevel::MuitoForte => {
            "Excelente! Sua senha é muito forte e oferece proteção robusta contra ataques."
        }
    }
}

/// Validator palette, distinct from the classifier indicator colors.
pub fn color_code(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::Fraca => "#dc3545",
        StrengthLevel::Media => "#ffc107",
        StrengthLevel::Forte => "#28a745",
        StrengthLevel::MuitoForte => "#155724",
    }
}

/// Validates password strength using interpolated scoring.
///
/// # Arguments
/// * `password` - The password to validate, trimmed before analysis
///
/// # Returns
/// A `ValidationResult` with level, score and the met/missing criteria
/// in the order lowercase, uppercase, number, special, length.
pub fn validate_password_strength(password: &SecretString) -> ValidationResult {
    let analysis = CharacterAnalysis::trimmed(password.expose_secret());
    let tier = ScoringStrategy::Interpolated.assess(&analysis);

    let mut met_criteria = Vec::new();
    let mut missing_criteria = Vec::new();
    for (section_name, section_fn) in SECTIONS {
        let outcome = section_fn(&analysis);

        #[cfg(feature = "tracing")]
        tracing::trace!("criterion section {}: met={}", section_name, outcome.is_met());
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        match outcome {
            CriterionOutcome::Met(item) => met_criteria.push(item),
            CriterionOutcome::Missing(item) => missing_criteria.push(item),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "validated password: level={} score={} rule={} missing={}",
        tier.level,
        tier.score,
        tier.rule,
        missing_criteria.len()
    );

    ValidationResult {
        strength_level: tier.level,
        score: tier.score,
        has_lowercase: analysis.has_lowercase,
        has_uppercase: analysis.has_uppercase,
        has_numbers: analysis.has_numbers,
        has_special_chars: analysis.has_special_chars,
        length: analysis.length,
        criteria_count: analysis.criteria_count,
        met_criteria,
        missing_criteria,
        feedback_message: feedback_message(tier.level),
        color_code: color_code(tier.level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(pwd: &str) -> ValidationResult {
        validate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    fn labels(items: &[CriteriaItem]) -> Vec<&str> {
        items.iter().map(|i| i.criterion.as_str()).collect()
    }

    #[test]
    fn test_validate_five_criteria_under_sixteen_is_strong() {
        let result = validate("MyP@ssw0rd123");
        assert_eq!(result.length, 13);
        assert_eq!(result.criteria_count, 5);
        assert_eq!(result.strength_level, StrengthLevel::Forte);
        assert_eq!(result.score, 65);
        assert_eq!(result.color_code, "#28a745");
        assert_eq!(result.met_criteria.len(), 5);
        assert!(result.missing_criteria.is_empty());
        assert!(result.feedback_message.starts_with("Sua senha é forte"));
    }

    #[test]
    fn test_validate_weak_password_lists_missing() {
        let result = validate("abcd");
        assert_eq!(result.strength_level, StrengthLevel::Fraca);
        assert_eq!(result.color_code, "#dc3545");
        assert_eq!(labels(&result.met_criteria), vec!["Letras minúsculas"]);
        assert_eq!(
            labels(&result.missing_criteria),
            vec![
                "Letras maiúsculas",
                "Números",
                "Caracteres especiais",
                "Comprimento adequado",
            ]
        );
        assert_eq!(
            result.missing_criteria[3].description,
            "Possui apenas 4 caracteres. Recomendado: 8 ou mais caracteres"
        );
    }

    #[test]
    fn test_validate_medium() {
        let result = validate("password1");
        assert_eq!(result.strength_level, StrengthLevel::Media);
        // criteria 3, length 9: 26 + 8 + 2.5
        assert_eq!(result.score, 37);
        assert_eq!(result.color_code, "#ffc107");
        assert_eq!(
            result.met_criteria[2].description,
            "Possui 9 caracteres (recomendado: 8 ou mais)"
        );
    }

    #[test]
    fn test_validate_very_strong() {
        let result = validate("Correct-Horse-Battery-9");
        assert_eq!(result.strength_level, StrengthLevel::MuitoForte);
        // 76 + 7 / 10 * 24 = 92.8
        assert_eq!(result.score, 93);
        assert_eq!(result.color_code, "#155724");
        assert_eq!(
            result.feedback_message,
            "Excelente! Sua senha é muito forte e oferece proteção robusta contra ataques."
        );
    }

    #[test]
    fn test_validate_each_criterion_listed_once() {
        for pwd in ["abcd", "ABCD1234", "Ab1!", "MyP@ssw0rd123"] {
            let result = validate(pwd);
            assert_eq!(result.met_criteria.len() + result.missing_criteria.len(), 5);
            assert_eq!(result.met_criteria.len(), result.criteria_count);
        }
    }

    #[test]
    fn test_sections_run_in_reporting_order() {
        let names: Vec<_> = SECTIONS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["lowercase", "uppercase", "number", "special", "length"]);

        // Nothing met: every label shows up in missing, in section order.
        let result = validate("    ");
        assert_eq!(
            labels(&result.missing_criteria),
            vec![
                "Letras minúsculas",
                "Letras maiúsculas",
                "Números",
                "Caracteres especiais",
                "Comprimento adequado",
            ]
        );
    }

    #[test]
    fn test_validate_trims_byte_order_mark() {
        assert_eq!(validate("\u{FEFF}abcd").length, 4);
    }

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(validate("  abcd  "), validate("abcd"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        assert_eq!(validate("MyP@ssw0rd123"), validate("MyP@ssw0rd123"));
    }
}
