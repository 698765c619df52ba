use std::path::Path;

use platerank_common::error::{PlateError, PlateResult};
use serde::{Deserialize, Serialize};

use crate::rules::{is_known_rule, DEFAULT_RULE_NAMES};

/// Named magnitudes the rules draw their parameters from.
///
/// Every key has a default; a configuration document only overrides a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub no_four_bonus: f64,
    pub four_penalty_per_count: f64,
    pub repeat_base_score: f64,
    pub lucky_digit_score: f64,
    pub sequence_base_score: f64,
    pub all_even_odd_score: f64,
    pub all_prime_score: f64,
    pub mostly_prime_score: f64,
    pub special_letter_score: f64,
    pub avoid_seven_bonus: f64,
    pub seven_penalty_per_count: f64,
    pub palindrome_full_score: f64,
    pub palindrome_partial_base_score: f64,
    pub digit_sum_divisor: f64,
    pub digit_sum_score: f64,
    pub decreasing_base_score: f64,
    pub aabb_pattern_score: f64,
    pub abab_pattern_score: f64,
    pub abc_pattern_score: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            no_four_bonus: 10.0,
            four_penalty_per_count: 10.0,
            repeat_base_score: 15.0,
            lucky_digit_score: 20.0,
            sequence_base_score: 20.0,
            all_even_odd_score: 20.0,
            all_prime_score: 20.0,
            mostly_prime_score: 10.0,
            special_letter_score: 10.0,
            avoid_seven_bonus: 5.0,
            seven_penalty_per_count: 3.0,
            palindrome_full_score: 35.0,
            palindrome_partial_base_score: 8.0,
            digit_sum_divisor: 10.0,
            digit_sum_score: 15.0,
            decreasing_base_score: 18.0,
            aabb_pattern_score: 25.0,
            abab_pattern_score: 28.0,
            abc_pattern_score: 20.0,
        }
    }
}

impl ScoreWeights {
    pub fn entries(&self) -> [(&'static str, f64); 19] {
        [
            ("no_four_bonus", self.no_four_bonus),
            ("four_penalty_per_count", self.four_penalty_per_count),
            ("repeat_base_score", self.repeat_base_score),
            ("lucky_digit_score", self.lucky_digit_score),
            ("sequence_base_score", self.sequence_base_score),
            ("all_even_odd_score", self.all_even_odd_score),
            ("all_prime_score", self.all_prime_score),
            ("mostly_prime_score", self.mostly_prime_score),
            ("special_letter_score", self.special_letter_score),
            ("avoid_seven_bonus", self.avoid_seven_bonus),
            ("seven_penalty_per_count", self.seven_penalty_per_count),
            ("palindrome_full_score", self.palindrome_full_score),
            ("palindrome_partial_base_score", self.palindrome_partial_base_score),
            ("digit_sum_divisor", self.digit_sum_divisor),
            ("digit_sum_score", self.digit_sum_score),
            ("decreasing_base_score", self.decreasing_base_score),
            ("aabb_pattern_score", self.aabb_pattern_score),
            ("abab_pattern_score", self.abab_pattern_score),
            ("abc_pattern_score", self.abc_pattern_score),
        ]
    }

    pub fn is_known_key(key: &str) -> bool {
        Self::default().entries().iter().any(|(name, _)| *name == key)
    }

    fn validate(&self) -> PlateResult<()> {
        if let Some((key, value)) = self.entries().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlateError::Config(format!(
                "score weight {key} must be finite, got {value}"
            )));
        }
        let divisor = self.digit_sum_divisor;
        if divisor < 1.0 || divisor.fract() != 0.0 || divisor > f64::from(u32::MAX) {
            return Err(PlateError::Config(format!(
                "digit_sum_divisor must be a positive integer, got {divisor}"
            )));
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            weight: 1.0,
            description: String::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

fn default_rules() -> Vec<RuleDefinition> {
    DEFAULT_RULE_NAMES
        .iter()
        .map(|name| RuleDefinition::new(*name))
        .collect()
}

/// Rule set and score weights for one run. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleDefinition>,
    #[serde(default)]
    pub score_weights: ScoreWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            score_weights: ScoreWeights::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Unknown `score_weights` keys are ignored with a warning; anything
    /// malformed is a [`PlateError::Config`] and nothing is applied.
    pub fn from_json_str(raw: &str) -> PlateResult<Self> {
        let doc: serde_json::Value = serde_json::from_str(raw)
            .map_err(|e| PlateError::Config(format!("invalid scoring config: {e}")))?;

        if let Some(weights) = doc.get("score_weights").and_then(|w| w.as_object()) {
            for key in weights.keys().filter(|k| !ScoreWeights::is_known_key(k)) {
                tracing::warn!(key = %key, "ignoring unknown score weight");
            }
        }

        let config: Self = serde_json::from_value(doc)
            .map_err(|e| PlateError::Config(format!("invalid scoring config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> PlateResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PlateError::Config(format!("cannot read scoring config {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> PlateResult<()> {
        for def in &self.rules {
            if !is_known_rule(&def.name) {
                return Err(PlateError::Config(format!("unknown rule: {}", def.name)));
            }
            if !def.weight.is_finite() {
                return Err(PlateError::Config(format!(
                    "rule {} has non-finite weight {}",
                    def.name, def.weight
                )));
            }
        }
        self.score_weights.validate()
    }
}
