use crate::digits::{digit_sequence, longest_run, render};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "decreasing_sequence";

pub struct DecreasingSequenceRule {
    pub weight: f64,
    pub base_score: f64,
}

impl Rule for DecreasingSequenceRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        match longest_run(&digits, |a, b| a == b + 1) {
            Some(run) if run.len >= 3 => {
                let score = (run.len - 2) as f64 * self.base_score;
                let seq = render(&digits[run.start..run.start + run.len]);
                ScoreResult::new(
                    NAME,
                    score,
                    self.weight,
                    format!("{}-digit decreasing run {seq} (+{score})", run.len),
                )
            }
            _ => ScoreResult::new(NAME, 0.0, self.weight, "no decreasing run of 3 or more"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_run_scores() {
        let rule = DecreasingSequenceRule {
            weight: 1.0,
            base_score: 18.0,
        };
        let result = rule.evaluate("CDQ6543");
        assert_eq!(result.score, 36.0);
        assert_eq!(result.reason, "4-digit decreasing run 6543 (+36)");
        assert_eq!(rule.evaluate("CDM6789").score, 0.0);
    }
}
