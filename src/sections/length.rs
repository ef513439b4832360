//! Length section - checks the recommended minimum length.

use super::CriterionOutcome;
use crate::analysis::{CharacterAnalysis, MIN_RECOMMENDED_LENGTH};

/// Reports the actual length against the recommended minimum.
pub fn length_section(analysis: &CharacterAnalysis) -> CriterionOutcome {
    let length = analysis.length;
    CriterionOutcome::new(
        analysis.meets_length(),
        "Comprimento adequado",
        format!(
            "Possui {} caracteres (recomendado: {} ou mais)",
            length, MIN_RECOMMENDED_LENGTH
        ),
        format!(
            "Possui apenas {} caracteres. Recomendado: {} ou mais caracteres",
            length, MIN_RECOMMENDED_LENGTH
        ),
    )
}
