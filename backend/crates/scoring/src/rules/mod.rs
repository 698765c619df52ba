//! Built-in scoring rules.
//!
//! Each rule is an independent value implementing [`Rule`]; none depends on
//! another rule's result. New rules only need an implementation and an entry
//! in [`build_rule`].

pub mod all_even_or_odd;
pub mod all_primes;
pub mod avoid_seven;
pub mod consecutive_repeats;
pub mod decreasing_sequence;
pub mod digit_pattern;
pub mod digit_sum;
pub mod increasing_sequence;
pub mod lucky_68;
pub mod no_four;
pub mod palindrome;
pub mod special_letters;

use crate::config::ScoreWeights;
use crate::trace::ScoreResult;

use self::all_even_or_odd::AllEvenOrOddRule;
use self::all_primes::AllPrimesRule;
use self::avoid_seven::AvoidSevenRule;
use self::consecutive_repeats::ConsecutiveRepeatsRule;
use self::decreasing_sequence::DecreasingSequenceRule;
use self::digit_pattern::DigitPatternRule;
use self::digit_sum::DigitSumDivisibleRule;
use self::increasing_sequence::IncreasingSequenceRule;
use self::lucky_68::Lucky68Rule;
use self::no_four::NoFourRule;
use self::palindrome::PalindromeRule;
use self::special_letters::SpecialLettersRule;

/// A pure, deterministic scoring function over plate text.
///
/// `evaluate` never fails: when the pattern it looks for is absent (including
/// plates without digits) it returns a zero score with a neutral reason.
pub trait Rule: Send + Sync {
    fn name(&self) -> &str;
    fn weight(&self) -> f64;
    fn evaluate(&self, plate: &str) -> ScoreResult;
}

/// Rules registered by the default configuration, in evaluation order.
pub const DEFAULT_RULE_NAMES: [&str; 7] = [
    no_four::NAME,
    consecutive_repeats::NAME,
    lucky_68::NAME,
    increasing_sequence::NAME,
    all_even_or_odd::NAME,
    all_primes::NAME,
    special_letters::NAME,
];

/// Rules available by name but only registered when configured.
pub const OPTIONAL_RULE_NAMES: [&str; 5] = [
    avoid_seven::NAME,
    palindrome::NAME,
    digit_sum::NAME,
    decreasing_sequence::NAME,
    digit_pattern::NAME,
];

pub fn is_known_rule(name: &str) -> bool {
    DEFAULT_RULE_NAMES.contains(&name) || OPTIONAL_RULE_NAMES.contains(&name)
}

/// Build the rule registered under `name`, with its parameters bound from
/// `weights`. Returns `None` for unknown names.
pub fn build_rule(name: &str, weight: f64, weights: &ScoreWeights) -> Option<Box<dyn Rule>> {
    let rule: Box<dyn Rule> = match name {
        no_four::NAME => Box::new(NoFourRule {
            weight,
            bonus: weights.no_four_bonus,
            penalty_per_count: weights.four_penalty_per_count,
        }),
        consecutive_repeats::NAME => Box::new(ConsecutiveRepeatsRule {
            weight,
            base_score: weights.repeat_base_score,
        }),
        lucky_68::NAME => Box::new(Lucky68Rule {
            weight,
            per_digit: weights.lucky_digit_score,
        }),
        increasing_sequence::NAME => Box::new(IncreasingSequenceRule {
            weight,
            base_score: weights.sequence_base_score,
        }),
        all_even_or_odd::NAME => Box::new(AllEvenOrOddRule {
            weight,
            score: weights.all_even_odd_score,
        }),
        all_primes::NAME => Box::new(AllPrimesRule {
            weight,
            all_score: weights.all_prime_score,
            mostly_score: weights.mostly_prime_score,
        }),
        special_letters::NAME => Box::new(SpecialLettersRule {
            weight,
            per_letter: weights.special_letter_score,
        }),
        avoid_seven::NAME => Box::new(AvoidSevenRule {
            weight,
            bonus: weights.avoid_seven_bonus,
            penalty_per_count: weights.seven_penalty_per_count,
        }),
        palindrome::NAME => Box::new(PalindromeRule {
            weight,
            full_score: weights.palindrome_full_score,
            partial_base_score: weights.palindrome_partial_base_score,
        }),
        digit_sum::NAME => Box::new(DigitSumDivisibleRule {
            weight,
            divisor: weights.digit_sum_divisor as u32,
            score: weights.digit_sum_score,
        }),
        decreasing_sequence::NAME => Box::new(DecreasingSequenceRule {
            weight,
            base_score: weights.decreasing_base_score,
        }),
        digit_pattern::NAME => Box::new(DigitPatternRule {
            weight,
            aabb_score: weights.aabb_pattern_score,
            abab_score: weights.abab_pattern_score,
            abc_score: weights.abc_pattern_score,
        }),
        _ => return None,
    };
    Some(rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_name_builds() {
        let weights = ScoreWeights::default();
        for name in DEFAULT_RULE_NAMES.iter().chain(OPTIONAL_RULE_NAMES.iter()) {
            let rule = build_rule(name, 1.5, &weights).expect("known rule builds");
            assert_eq!(rule.name(), *name);
            assert_eq!(rule.weight(), 1.5);
        }
    }

    #[test]
    fn unknown_name_builds_nothing() {
        assert!(build_rule("pronunciation", 1.0, &ScoreWeights::default()).is_none());
        assert!(!is_known_rule("pronunciation"));
    }

    #[test]
    fn rules_never_fail_on_digitless_plates() {
        let weights = ScoreWeights::default();
        for name in DEFAULT_RULE_NAMES.iter().chain(OPTIONAL_RULE_NAMES.iter()) {
            let rule = build_rule(name, 1.0, &weights).expect("known rule builds");
            for plate in ["", "ABCDEF", "CDMJTQ"] {
                let result = rule.evaluate(plate);
                assert!(result.score.is_finite(), "{name} on {plate:?}");
                assert!(!result.reason.is_empty(), "{name} on {plate:?}");
            }
        }
    }
}
