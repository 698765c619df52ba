use serde::{Deserialize, Serialize};

/// Outcome of one rule evaluated against one plate.
///
/// `score` is the rule's raw score; `weighted_score` is `score * weight` and
/// is what contributes to the plate total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub rule: String,
    pub score: f64,
    pub weight: f64,
    pub weighted_score: f64,
    pub reason: String,
}

impl ScoreResult {
    pub fn new(rule: &str, score: f64, weight: f64, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            score,
            weight,
            weighted_score: score * weight,
            reason: reason.into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.weighted_score == 0.0
    }
}

/// Total and per-rule breakdown for one plate, in rule registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateScore {
    pub total: f64,
    pub breakdown: Vec<ScoreResult>,
}

impl PlateScore {
    /// Breakdown entries that moved the total.
    pub fn active(&self) -> impl Iterator<Item = &ScoreResult> {
        self.breakdown.iter().filter(|r| !r.is_zero())
    }

    pub fn result_for(&self, rule: &str) -> Option<&ScoreResult> {
        self.breakdown.iter().find(|r| r.rule == rule)
    }
}
