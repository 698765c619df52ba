use crate::digits::{count_digit, count_phrase, digit_sequence};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "lucky_68";

/// Linear bonus per 6 or 8.
pub struct Lucky68Rule {
    pub weight: f64,
    pub per_digit: f64,
}

impl Rule for Lucky68Rule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        let sixes = count_digit(&digits, 6);
        let eights = count_digit(&digits, 8);

        if sixes + eights == 0 {
            return ScoreResult::new(NAME, 0.0, self.weight, "no 6 or 8");
        }

        let details: Vec<String> = [(sixes, 6), (eights, 8)]
            .into_iter()
            .filter(|(count, _)| *count > 0)
            .map(|(count, digit)| count_phrase(count, digit))
            .collect();
        let score = (sixes + eights) as f64 * self.per_digit;
        ScoreResult::new(
            NAME,
            score,
            self.weight,
            format!("contains {} (+{score})", details.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule() -> Lucky68Rule {
        Lucky68Rule {
            weight: 1.0,
            per_digit: 20.0,
        }
    }

    #[test]
    fn reason_lists_both_digits() {
        let result = rule().evaluate("CD46666");
        assert_eq!(result.score, 80.0);
        assert_eq!(result.reason, "contains 4 sixes (+80)");

        let result = rule().evaluate("CDM6789");
        assert_eq!(result.reason, "contains 1 six, 1 eight (+40)");
    }

    proptest! {
        #[test]
        fn score_is_linear_in_lucky_count(lucky in "[68]{0,6}", other in "[0-579]{0,3}") {
            let plate = format!("CD{other}{lucky}");
            prop_assert_eq!(rule().evaluate(&plate).score, lucky.len() as f64 * 20.0);
        }
    }
}
