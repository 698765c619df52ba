use crate::digits::digit_sequence;
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "all_even_or_odd";

pub struct AllEvenOrOddRule {
    pub weight: f64,
    pub score: f64,
}

impl Rule for AllEvenOrOddRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        if digits.is_empty() {
            return ScoreResult::new(NAME, 0.0, self.weight, "no digits");
        }

        let parity = if digits.iter().all(|d| d % 2 == 0) {
            "even"
        } else if digits.iter().all(|d| d % 2 == 1) {
            "odd"
        } else {
            return ScoreResult::new(NAME, 0.0, self.weight, "mixed even and odd digits");
        };

        ScoreResult::new(
            NAME,
            self.score,
            self.weight,
            format!("all {} digits {parity} (+{})", digits.len(), self.score),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> AllEvenOrOddRule {
        AllEvenOrOddRule {
            weight: 1.0,
            score: 20.0,
        }
    }

    #[test]
    fn all_odd_digits_score() {
        let result = rule().evaluate("AB13579");
        assert_eq!(result.score, 20.0);
        assert_eq!(result.reason, "all 5 digits odd (+20)");
    }

    #[test]
    fn all_even_digits_score() {
        assert_eq!(rule().evaluate("CD2468").reason, "all 4 digits even (+20)");
    }

    #[test]
    fn mixed_parity_scores_zero() {
        let result = rule().evaluate("AB1234");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reason, "mixed even and odd digits");
    }

    #[test]
    fn digitless_plate_scores_zero() {
        let result = rule().evaluate("AB");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reason, "no digits");
    }
}
