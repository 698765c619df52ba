use platerank_common::error::{PlateError, PlateResult};
use platerank_common::{Detection, GridPosition};
use platerank_layout::{assign_grid_positions, GridConfig};
use serde::{Deserialize, Serialize};

use crate::engine::PlateScorer;
use crate::trace::ScoreResult;

/// A detection with its grid position and score, as handed to reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlate {
    pub detection: Detection,
    pub position: GridPosition,
    pub total_score: f64,
    pub breakdown: Vec<ScoreResult>,
}

/// Score detections whose grid positions are already known and sort them by
/// total score, highest first. Ties keep the input order.
///
/// `positions[i]` must belong to `detections[i]`.
pub fn rank_plates(
    scorer: &PlateScorer,
    detections: &[Detection],
    positions: &[GridPosition],
) -> PlateResult<Vec<ScoredPlate>> {
    if detections.len() != positions.len() {
        return Err(PlateError::Validation(format!(
            "{} detections but {} grid positions",
            detections.len(),
            positions.len()
        )));
    }
    Ok(score_and_sort(
        scorer,
        detections.iter().zip(positions.iter().copied()),
    ))
}

/// Assign grid positions, then score and rank.
pub fn rank_detections(
    scorer: &PlateScorer,
    detections: &[Detection],
    grid: &GridConfig,
) -> Vec<ScoredPlate> {
    let positions = assign_grid_positions(detections, grid);
    score_and_sort(scorer, detections.iter().zip(positions))
}

fn score_and_sort<'a>(
    scorer: &PlateScorer,
    placed: impl Iterator<Item = (&'a Detection, GridPosition)>,
) -> Vec<ScoredPlate> {
    let mut ranked: Vec<ScoredPlate> = placed
        .map(|(detection, position)| {
            let score = scorer.score_plate(&detection.text);
            ScoredPlate {
                detection: detection.clone(),
                position,
                total_score: score.total,
                breakdown: score.breakdown,
            }
        })
        .collect();

    // Stable sort: equal totals stay in detection order.
    ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::engine::default_scorer;
    use platerank_common::BoundingBox;

    fn det(text: &str, x: f64, y: f64) -> Detection {
        Detection::new(text, Some(0.8), BoundingBox::new(x, y, 100.0, 30.0))
    }

    fn scorer() -> PlateScorer {
        default_scorer(&ScoringConfig::default()).expect("default config is valid")
    }

    #[test]
    fn ranks_by_score_descending_with_positions() {
        let detections = vec![
            det("CDP4444", 10.0, 10.0),
            det("CD88888", 300.0, 15.0),
            det("CD32024", 10.0, 400.0),
        ];
        let ranked = rank_detections(&scorer(), &detections, &GridConfig::default());

        let plates: Vec<&str> = ranked.iter().map(|p| p.detection.text.as_str()).collect();
        assert_eq!(plates[0], "CD88888");
        assert_eq!(ranked[0].total_score, 190.0);
        assert_eq!(ranked[0].position, GridPosition::new(1, 2));

        let four = ranked
            .iter()
            .find(|p| p.detection.text == "CDP4444")
            .expect("CDP4444 ranked");
        assert_eq!(four.total_score, 25.0);
        assert_eq!(four.position, GridPosition::new(1, 1));
    }

    #[test]
    fn ties_keep_detection_order() {
        let detections = vec![det("AB13579", 0.0, 500.0), det("XY13579", 0.0, 0.0)];
        let ranked = rank_detections(&scorer(), &detections, &GridConfig::default());
        assert_eq!(ranked[0].detection.text, "AB13579");
        assert_eq!(ranked[1].detection.text, "XY13579");
        assert_eq!(ranked[0].position.row, 2);
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(rank_detections(&scorer(), &[], &GridConfig::default()).is_empty());
    }

    #[test]
    fn misaligned_positions_are_rejected() {
        let detections = vec![det("CD88888", 0.0, 0.0)];
        let result = rank_plates(&scorer(), &detections, &[]);
        assert!(matches!(result, Err(PlateError::Validation(_))));
    }

    #[test]
    fn explicit_positions_are_carried_through() {
        let detections = vec![det("CD88888", 0.0, 0.0)];
        let ranked = rank_plates(&scorer(), &detections, &[GridPosition::new(4, 2)])
            .expect("aligned input");
        assert_eq!(ranked[0].position, GridPosition::new(4, 2));
    }
}
