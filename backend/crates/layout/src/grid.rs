use platerank_common::{Detection, GridPosition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    /// Maximum top-edge Y gap (pixels) between a detection and the previous
    /// one in Y order for both to stay in the same row.
    pub row_threshold: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_threshold: 50.0,
        }
    }
}

/// Assign a 1-based `(row, column)` to every detection.
///
/// The returned vector is aligned with `detections`: element `i` is the
/// position of `detections[i]`.
///
/// Rows are formed by single-linkage chaining over the top-edge Y: after a
/// stable sort by Y, a detection joins the current row when its Y is within
/// `row_threshold` of the most recently added member. Chains can therefore
/// span more than `row_threshold` between their first and last members.
/// Columns follow the left-edge X inside each row.
pub fn assign_grid_positions(detections: &[Detection], config: &GridConfig) -> Vec<GridPosition> {
    let mut positions = vec![GridPosition::new(0, 0); detections.len()];
    if detections.is_empty() {
        return positions;
    }

    let mut by_y: Vec<usize> = (0..detections.len()).collect();
    by_y.sort_by(|&a, &b| detections[a].bbox.y.total_cmp(&detections[b].bbox.y));

    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut last_y = f64::NAN;

    for idx in by_y {
        let y = detections[idx].bbox.y;
        if !current.is_empty() && (y - last_y).abs() > config.row_threshold {
            rows.push(std::mem::take(&mut current));
        }
        current.push(idx);
        last_y = y;
    }
    rows.push(current);

    for (row_idx, mut members) in rows.into_iter().enumerate() {
        members.sort_by(|&a, &b| detections[a].bbox.x.total_cmp(&detections[b].bbox.x));
        for (col_idx, idx) in members.into_iter().enumerate() {
            positions[idx] = GridPosition::new(row_idx + 1, col_idx + 1);
        }
    }

    tracing::debug!(
        detections = detections.len(),
        rows = positions.iter().map(|p| p.row).max().unwrap_or(0),
        row_threshold = config.row_threshold,
        "grid positions assigned"
    );

    positions
}
