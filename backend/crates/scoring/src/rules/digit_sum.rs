use crate::digits::digit_sequence;
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "digit_sum_divisible";

/// Bonus when the digit sum is a multiple of `divisor` (validated non-zero
/// at configuration load).
pub struct DigitSumDivisibleRule {
    pub weight: f64,
    pub divisor: u32,
    pub score: f64,
}

impl Rule for DigitSumDivisibleRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        if digits.is_empty() || self.divisor == 0 {
            return ScoreResult::new(NAME, 0.0, self.weight, "no digits");
        }

        let sum: u32 = digits.iter().map(|&d| u32::from(d)).sum();
        if sum % self.divisor == 0 {
            ScoreResult::new(
                NAME,
                self.score,
                self.weight,
                format!("digit sum {sum} divisible by {} (+{})", self.divisor, self.score),
            )
        } else {
            ScoreResult::new(
                NAME,
                0.0,
                self.weight,
                format!("digit sum {sum} not divisible by {}", self.divisor),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_sum_scores() {
        let rule = DigitSumDivisibleRule {
            weight: 1.0,
            divisor: 10,
            score: 15.0,
        };
        assert_eq!(rule.evaluate("CD5555").score, 15.0);
        assert_eq!(rule.evaluate("CD5556").score, 0.0);
    }
}
