//! Password strength meter: a count of satisfied composition predicates rendered
//! as a proportional bar with a severity label.

use crate::rules::{MIN_STRONG_PASSWORD, text_len};

pub const MAX_SCORE: u8 = 5;

/// Severity labels and bar colours, indexed by `score - 1`.
const LEVELS: [(&str, &str); MAX_SCORE as usize] = [
    ("Lemah", "#f44336"),
    ("Cukup", "#ff9800"),
    ("Sedang", "#ffc107"),
    ("Kuat", "#4caf50"),
    ("Sangat Kuat", "#2196f3"),
];

/// Colour of an empty bar.
pub const NEUTRAL_COLOR: &str = "#ddd";

/// Number of satisfied predicates, in `0..=5`.
#[must_use]
pub fn score(password: &str) -> u8 {
    let predicates = [
        text_len(password) >= MIN_STRONG_PASSWORD,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    predicates.into_iter().map(u8::from).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrengthMeter {
    pub score: u8,
    pub width_percent: u8,
    pub color: &'static str,
    /// Empty when the score is zero.
    pub label: &'static str,
}

impl StrengthMeter {
    #[must_use]
    pub fn for_password(password: &str) -> Self {
        Self::from_score(score(password))
    }

    /// Scores above the maximum are clamped.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        let (label, color) = match score.checked_sub(1) {
            Some(index) => LEVELS[usize::from(index)],
            None => ("", NEUTRAL_COLOR),
        };
        Self {
            score,
            width_percent: score * 20,
            color,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn score_counts_each_predicate() {
        assert_eq!(score(""), 0);
        assert_eq!(score("a"), 1);
        assert_eq!(score("aA"), 2);
        assert_eq!(score("aA1"), 3);
        assert_eq!(score("aA1!"), 4);
        assert_eq!(score("aA1!aaaa"), 5);
        assert_eq!(score("        "), 2);
    }

    #[test]
    fn score_ignores_character_order() {
        assert_eq!(score("1aA!bbbb"), score("bbbb!Aa1"));
    }

    #[test]
    fn adding_a_missing_class_never_lowers_score() {
        let samples = ["", "abc", "ABCDEFGH", "abcdefgh", "12345678", "a1", "Abc!"];
        let additions = ['a', 'Z', '7', '#'];
        for sample in samples {
            for extra in additions {
                let extended = format!("{sample}{extra}");
                assert!(
                    score(&extended) >= score(sample),
                    "{extended:?} scored below {sample:?}"
                );
            }
        }
    }

    #[test]
    fn meter_for_zero_is_empty_and_neutral() {
        assert_eq!(
            StrengthMeter::from_score(0),
            StrengthMeter {
                score: 0,
                width_percent: 0,
                color: NEUTRAL_COLOR,
                label: "",
            }
        );
    }

    #[test]
    fn meter_maps_levels_by_score() {
        let weak = StrengthMeter::for_password("abc");
        assert_eq!((weak.width_percent, weak.label, weak.color), (20, "Lemah", "#f44336"));

        let strongest = StrengthMeter::for_password("Abcdef1!");
        assert_eq!(
            (strongest.width_percent, strongest.label, strongest.color),
            (100, "Sangat Kuat", "#2196f3")
        );
    }

    #[test]
    fn meter_clamps_out_of_range_scores() {
        assert_eq!(StrengthMeter::from_score(9), StrengthMeter::from_score(MAX_SCORE));
    }
}
