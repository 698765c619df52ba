use crate::digits::{count_digit, count_phrase, digit_sequence};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "no_four";

/// Rewards plates without a 4 and penalises each 4 present.
pub struct NoFourRule {
    pub weight: f64,
    pub bonus: f64,
    pub penalty_per_count: f64,
}

impl Rule for NoFourRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let fours = count_digit(&digit_sequence(plate), 4);
        if fours == 0 {
            return ScoreResult::new(
                NAME,
                self.bonus,
                self.weight,
                format!("no digit 4 (+{})", self.bonus),
            );
        }

        let penalty = self.penalty_per_count * fours as f64;
        ScoreResult::new(
            NAME,
            -penalty,
            self.weight,
            format!("contains {} (-{penalty})", count_phrase(fours, 4)),
        )
    }
}
