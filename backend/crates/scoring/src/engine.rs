use platerank_common::error::{PlateError, PlateResult};

use crate::config::ScoringConfig;
use crate::rules::{build_rule, Rule};
use crate::trace::{PlateScore, ScoreResult};

struct RuleEntry {
    rule: Box<dyn Rule>,
    enabled: bool,
}

/// Ordered rule registry.
///
/// Rules are evaluated in insertion order. Duplicate names are allowed and
/// contribute independently. Mutation (`add_rule`, `remove_rule`,
/// `set_enabled`) takes `&mut self`, so it can never overlap a `score_plate`.
#[derive(Default)]
pub struct PlateScorer {
    rules: Vec<RuleEntry>,
}

impl PlateScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.push(rule, true);
    }

    fn push(&mut self, rule: Box<dyn Rule>, enabled: bool) {
        self.rules.push(RuleEntry { rule, enabled });
    }

    /// Remove the first rule named `name`. Returns whether one was removed;
    /// an unknown name is a no-op.
    pub fn remove_rule(&mut self, name: &str) -> bool {
        match self.rules.iter().position(|e| e.rule.name() == name) {
            Some(idx) => {
                self.rules.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Enable or disable every rule named `name`. Returns whether any matched.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        let mut matched = false;
        for entry in self.rules.iter_mut().filter(|e| e.rule.name() == name) {
            entry.enabled = enabled;
            matched = true;
        }
        matched
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|e| e.rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every enabled rule in registration order.
    ///
    /// The breakdown keeps zero-score entries; disabled rules are absent
    /// from both the breakdown and the total.
    pub fn score_plate(&self, plate: &str) -> PlateScore {
        let breakdown: Vec<ScoreResult> = self
            .rules
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.rule.evaluate(plate))
            .collect();

        let total: f64 = breakdown.iter().map(|r| r.weighted_score).sum();

        tracing::debug!(plate, total, rules = breakdown.len(), "plate scored");

        PlateScore { total, breakdown }
    }
}

/// Build a fresh scorer from `config`.
///
/// The configuration is validated as a whole first; on error nothing is built.
pub fn default_scorer(config: &ScoringConfig) -> PlateResult<PlateScorer> {
    config.validate()?;

    let mut scorer = PlateScorer::new();
    for def in &config.rules {
        let rule = build_rule(&def.name, def.weight, &config.score_weights)
            .ok_or_else(|| PlateError::Config(format!("unknown rule: {}", def.name)))?;
        scorer.push(rule, def.enabled);
    }

    tracing::debug!(
        rules = ?scorer.rule_names(),
        enabled = scorer.rules.iter().filter(|e| e.enabled).count(),
        "scorer built"
    );

    Ok(scorer)
}
