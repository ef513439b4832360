use pwd_assessment::{
    CharacterAnalysis, ScoringStrategy, StrengthLevel, classify_password_security,
    get_password_validation_feedback, validate_password_strength,
};
use secrecy::SecretString;

fn secret(pwd: &str) -> SecretString {
    SecretString::new(pwd.to_string().into())
}

fn sample_passwords() -> Vec<String> {
    let mut samples: Vec<String> = [
        "aaaa",
        "Ab1!",
        "    ",
        "abc12",
        "password1",
        "MyPass12",
        "MyP@ssw0rd123",
        "Abcdefgh1234",
        "Abcdefgh1234!xyz",
        "Correct-Horse-Battery-9",
        "abcdefghijklmnopqrst",
        "!@#$%^&*()_+-=[]{}|;:,.<>?/~`",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    samples.push("Zz9#".repeat(25));
    samples.push("x".repeat(100));
    samples
}

#[test]
fn scores_stay_within_bounds() {
    for pwd in sample_passwords() {
        let secret = secret(&pwd);
        assert!(classify_password_security(&secret).security_score <= 100, "{}", pwd);
        assert!(validate_password_strength(&secret).score <= 100, "{}", pwd);
    }
}

#[test]
fn assessments_are_pure() {
    for pwd in sample_passwords() {
        let secret = secret(&pwd);
        assert_eq!(
            classify_password_security(&secret),
            classify_password_security(&secret)
        );
        assert_eq!(
            validate_password_strength(&secret),
            validate_password_strength(&secret)
        );
        assert_eq!(
            get_password_validation_feedback(&secret),
            get_password_validation_feedback(&secret)
        );
    }
}

#[test]
fn show_indicator_follows_trimmed_length() {
    for pwd in sample_passwords() {
        let result = classify_password_security(&secret(&pwd));
        assert_eq!(result.show_indicator, pwd.trim().chars().count() >= 4, "{:?}", pwd);
    }
}

#[test]
fn validator_score_never_drops_with_length_inside_a_tier() {
    for stem in ["Abc1!", "abc1", "ABCD", "Ab1"] {
        let mut previous: Option<(&str, u8)> = None;
        for extra in 0..=95 {
            let pwd = format!("{}{}", stem, "q".repeat(extra));
            let tier = ScoringStrategy::Interpolated.assess(&CharacterAnalysis::trimmed(&pwd));
            assert_eq!(validate_password_strength(&secret(&pwd)).score, tier.score);
            if let Some((rule, score)) = previous {
                if rule == tier.rule {
                    assert!(tier.score >= score, "{} dropped to {}", pwd, tier.score);
                }
            }
            previous = Some((tier.rule, tier.score));
        }
    }
}

#[test]
fn single_lowercase_type_is_weak() {
    let result = classify_password_security(&secret("aaaa"));
    assert_eq!(result.criteria_analysis.character_types, 1);
    assert_eq!(result.security_level, StrengthLevel::Fraca);
    assert_eq!(result.color_indicator, "#FF0000");
    assert_eq!(result.indicator_size, 25);
    // 4 length points + 15 lowercase points (four lowercase letters)
    assert_eq!(result.security_score, 19);
}

#[test]
fn five_criteria_below_sixteen_chars_validates_as_strong() {
    let result = validate_password_strength(&secret("MyP@ssw0rd123"));
    assert_eq!(result.length, 13);
    assert_eq!(result.criteria_count, 5);
    assert_eq!(result.strength_level, StrengthLevel::Forte);
}

#[test]
fn short_mixed_password_meets_every_feedback_criterion() {
    let result = get_password_validation_feedback(&secret("Abc1!"));
    assert_eq!(result.len(), 5);
    assert!(result.iter().all(|c| c.met));
}

#[test]
fn empty_feedback_meets_nothing() {
    let result = get_password_validation_feedback(&secret(""));
    assert_eq!(result.len(), 5);
    assert!(result.iter().all(|c| !c.met));
}

#[test]
fn long_lowercase_only_lands_on_default_medium() {
    let result = classify_password_security(&secret("abcdefghijklmnopqrst"));
    assert_eq!(result.criteria_analysis.character_types, 2);
    assert_eq!(result.security_level, StrengthLevel::Media);
    assert_eq!(result.indicator_size, 50);
}
