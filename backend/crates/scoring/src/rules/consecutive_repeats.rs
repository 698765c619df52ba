use crate::digits::{digit_sequence, longest_run};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "consecutive_repeats";

/// Scores the longest run of one repeated digit: `(len - 1) * base_score`.
pub struct ConsecutiveRepeatsRule {
    pub weight: f64,
    pub base_score: f64,
}

impl Rule for ConsecutiveRepeatsRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        let Some(run) = longest_run(&digits, |a, b| a == b) else {
            return ScoreResult::new(NAME, 0.0, self.weight, "no digits");
        };

        if run.len < 2 {
            return ScoreResult::new(NAME, 0.0, self.weight, "no repeated digits");
        }

        let score = (run.len - 1) as f64 * self.base_score;
        ScoreResult::new(
            NAME,
            score,
            self.weight,
            format!("{} consecutive {}s (+{score})", run.len, digits[run.start]),
        )
    }
}
