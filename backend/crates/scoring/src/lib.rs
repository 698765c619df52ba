pub mod config;
pub mod digits;
pub mod engine;
pub mod ranking;
pub mod rules;
pub mod trace;

pub use config::{RuleDefinition, ScoreWeights, ScoringConfig};
pub use engine::{default_scorer, PlateScorer};
pub use ranking::{rank_detections, rank_plates, ScoredPlate};
pub use rules::{build_rule, Rule};
pub use trace::{PlateScore, ScoreResult};
