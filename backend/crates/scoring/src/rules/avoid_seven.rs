use crate::digits::{count_digit, count_phrase, digit_sequence};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "avoid_seven";

pub struct AvoidSevenRule {
    pub weight: f64,
    pub bonus: f64,
    pub penalty_per_count: f64,
}

impl Rule for AvoidSevenRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let sevens = count_digit(&digit_sequence(plate), 7);
        if sevens == 0 {
            return ScoreResult::new(
                NAME,
                self.bonus,
                self.weight,
                format!("no digit 7 (+{})", self.bonus),
            );
        }

        let penalty = self.penalty_per_count * sevens as f64;
        ScoreResult::new(
            NAME,
            -penalty,
            self.weight,
            format!("contains {} (-{penalty})", count_phrase(sevens, 7)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> AvoidSevenRule {
        AvoidSevenRule {
            weight: 1.0,
            bonus: 5.0,
            penalty_per_count: 3.0,
        }
    }

    #[test]
    fn each_seven_costs_the_penalty() {
        let result = rule().evaluate("CDP5747");
        assert_eq!(result.score, -6.0);
        assert_eq!(result.reason, "contains 2 sevens (-6)");
    }

    #[test]
    fn no_seven_gets_the_bonus() {
        let result = rule().evaluate("CD1234");
        assert_eq!(result.score, 5.0);
        assert_eq!(result.reason, "no digit 7 (+5)");
    }
}
