//! Character variety sections - lowercase, uppercase, numbers, special chars.

use super::CriterionOutcome;
use crate::analysis::CharacterAnalysis;

fn class_section(met: bool, criterion: &str, what: &str) -> CriterionOutcome {
    CriterionOutcome::new(
        met,
        criterion,
        format!("Contém pelo menos {}", what),
        format!("Adicione pelo menos {}", what),
    )
}

pub fn lowercase_section(analysis: &CharacterAnalysis) -> CriterionOutcome {
    class_section(
        analysis.has_lowercase,
        "Letras minúsculas",
        "uma letra minúscula (a-z)",
    )
}

pub fn uppercase_section(analysis: &CharacterAnalysis) -> CriterionOutcome {
    class_section(
        analysis.has_uppercase,
        "Letras maiúsculas",
        "uma letra maiúscula (A-Z)",
    )
}

pub fn number_section(analysis: &CharacterAnalysis) -> CriterionOutcome {
    class_section(analysis.has_numbers, "Números", "um número (0-9)")
}

pub fn special_section(analysis: &CharacterAnalysis) -> CriterionOutcome {
    class_section(
        analysis.has_special_chars,
        "Caracteres especiais",
        "um caractere especial (!@#$%^&* etc.)",
    )
}
