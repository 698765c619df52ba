use crate::digits::letters;
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "special_letters";

const SPECIAL: [char; 4] = ['M', 'J', 'T', 'Q'];

/// Bonus per occurrence of M, J, T or Q anywhere in the plate.
pub struct SpecialLettersRule {
    pub weight: f64,
    pub per_letter: f64,
}

impl Rule for SpecialLettersRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let found: Vec<String> = letters(plate)
            .filter(|c| SPECIAL.contains(c))
            .map(String::from)
            .collect();

        if found.is_empty() {
            return ScoreResult::new(NAME, 0.0, self.weight, "no special letters");
        }

        let score = found.len() as f64 * self.per_letter;
        ScoreResult::new(
            NAME,
            score,
            self.weight,
            format!("special letters {} (+{score})", found.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_count_separately() {
        let rule = SpecialLettersRule {
            weight: 1.0,
            per_letter: 10.0,
        };
        let result = rule.evaluate("MQM1234");
        assert_eq!(result.score, 30.0);
        assert_eq!(result.reason, "special letters M, Q, M (+30)");
        assert_eq!(rule.evaluate("CDP4444").score, 0.0);
    }
}
