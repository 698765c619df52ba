use crate::digits::digit_sequence;
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "all_primes";

const PRIME_DIGITS: [u8; 4] = [2, 3, 5, 7];

/// Full score when every digit is prime, a smaller one when at least 60% are.
pub struct AllPrimesRule {
    pub weight: f64,
    pub all_score: f64,
    pub mostly_score: f64,
}

impl Rule for AllPrimesRule {
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

        let total = digits.len();
        let primes = digits.iter().filter(|&&d| PRIME_DIGITS.contains(&d)).count();

        if primes == total {
            ScoreResult::new(
                NAME,
                self.all_score,
                self.weight,
                format!("all {total} digits prime (+{})", self.all_score),
            )
        } else if primes * 5 >= total * 3 {
            ScoreResult::new(
                NAME,
                self.mostly_score,
                self.weight,
                format!("{primes}/{total} digits prime (+{})", self.mostly_score),
            )
        } else {
            ScoreResult::new(
                NAME,
                0.0,
                self.weight,
                format!("only {primes}/{total} digits prime"),
            )
        }
    }
}
