use crate::digits::{digit_sequence, render};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "digit_pattern";

/// First matching shape wins, checked in order AABB, ABAB, ABC. Sequences
/// shorter than four digits never match.
pub struct DigitPatternRule {
    pub weight: f64,
    pub aabb_score: f64,
    pub abab_score: f64,
    pub abc_score: f64,
}

fn find_aabb(digits: &[u8]) -> Option<&[u8]> {
    digits
        .windows(4)
        .find(|w| w[0] == w[1] && w[2] == w[3] && w[0] != w[2])
}

fn find_abab(digits: &[u8]) -> Option<&[u8]> {
    digits
        .windows(4)
        .find(|w| w[0] == w[2] && w[1] == w[3] && w[0] != w[1])
}

fn find_abc(digits: &[u8]) -> Option<&[u8]> {
    digits
        .windows(3)
        .find(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1)
}

impl Rule for DigitPatternRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        if digits.len() < 4 {
            return ScoreResult::new(NAME, 0.0, self.weight, "fewer than 4 digits");
        }

        let found = find_aabb(&digits)
            .map(|w| ("AABB", w, self.aabb_score))
            .or_else(|| find_abab(&digits).map(|w| ("ABAB", w, self.abab_score)))
            .or_else(|| find_abc(&digits).map(|w| ("ABC", w, self.abc_score)));

        match found {
            Some((shape, window, score)) => ScoreResult::new(
                NAME,
                score,
                self.weight,
                format!("{shape} pattern {} (+{score})", render(window)),
            ),
            None => ScoreResult::new(NAME, 0.0, self.weight, "no digit pattern"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> DigitPatternRule {
        DigitPatternRule {
            weight: 1.0,
            aabb_score: 25.0,
            abab_score: 28.0,
            abc_score: 20.0,
        }
    }

    #[test]
    fn shapes_are_recognised() {
        assert_eq!(rule().evaluate("CDT3366").reason, "AABB pattern 3366 (+25)");
        assert_eq!(rule().evaluate("CD2828").reason, "ABAB pattern 2828 (+28)");
        assert_eq!(rule().evaluate("CD9123").reason, "ABC pattern 123 (+20)");
    }

    #[test]
    fn aabb_takes_priority_over_abc() {
        // 1122 and 234 both appear.
        assert_eq!(rule().evaluate("CD1122345").score, 25.0);
    }

    #[test]
    fn three_digit_sequences_never_match() {
        let result = rule().evaluate("CDM123");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reason, "fewer than 4 digits");
    }

    #[test]
    fn uniform_digits_match_nothing() {
        assert_eq!(rule().evaluate("CD88888").score, 0.0);
    }
}
