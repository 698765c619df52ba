use crate::digits::{digit_sequence, render};
use crate::trace::ScoreResult;

use super::Rule;

pub const NAME: &str = "palindrome";

/// Full score for a palindromic digit sequence; otherwise the longest
/// palindromic stretch of three or more digits scores `(len - 2) * base`.
pub struct PalindromeRule {
    pub weight: f64,
    pub full_score: f64,
    pub partial_base_score: f64,
}

fn is_palindrome(digits: &[u8]) -> bool {
    digits.iter().eq(digits.iter().rev())
}

/// Longest palindromic window of at least 3 digits, earliest first.
fn longest_palindrome(digits: &[u8]) -> Option<&[u8]> {
    (3..=digits.len())
        .rev()
        .find_map(|len| digits.windows(len).find(|w| is_palindrome(w)))
}

impl Rule for PalindromeRule {
    fn name(&self) -> &str {
        NAME
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn evaluate(&self, plate: &str) -> ScoreResult {
        let digits = digit_sequence(plate);
        if digits.len() < 3 {
            return ScoreResult::new(NAME, 0.0, self.weight, "fewer than 3 digits");
        }

        if is_palindrome(&digits) {
            return ScoreResult::new(
                NAME,
                self.full_score,
                self.weight,
                format!("palindrome {} (+{})", render(&digits), self.full_score),
            );
        }

        match longest_palindrome(&digits) {
            Some(window) => {
                let score = (window.len() - 2) as f64 * self.partial_base_score;
                ScoreResult::new(
                    NAME,
                    score,
                    self.weight,
                    format!("partial palindrome {} (+{score})", render(window)),
                )
            }
            None => ScoreResult::new(NAME, 0.0, self.weight, "no palindrome"),
        }
    }
}
