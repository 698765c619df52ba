use crate::digits::{digit_sequence, longest_run, render};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "increasing_sequence";

/// Scores the single longest step-by-one ascending run of at least three
/// digits: `(len - 2) * base_score`.
pub struct IncreasingSequenceRule {
    pub weight: f64,
    pub base_score: f64,
}

impl Rule for IncreasingSequenceRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        match longest_run(&digits, |a, b| b == a + 1) {
            Some(run) if run.len >= 3 => {
                let score = (run.len - 2) as f64 * self.base_score;
                let seq = render(&digits[run.start..run.start + run.len]);
                ScoreResult::new(
                    NAME,
                    score,
                    self.weight,
                    format!("{}-digit increasing run {seq} (+{score})", run.len),
                )
            }
            _ => ScoreResult::new(NAME, 0.0, self.weight, "no increasing run of 3 or more"),
        }
    }
}
