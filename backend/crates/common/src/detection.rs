use serde::{Deserialize, Serialize};

/// Axis-aligned box in image pixel coordinates; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box enclosing a quadrilateral given as four `[x, y]` corners,
    /// the shape recognizers usually report.
    pub fn from_quad(points: &[[f64; 2]; 4]) -> Self {
        let min_x = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// One recognized text region handed over by the OCR stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub text: String,
    pub confidence: Option<f64>,
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn new(text: impl Into<String>, confidence: Option<f64>, bbox: BoundingBox) -> Self {
        Self {
            text: text.into(),
            confidence,
            bbox,
        }
    }
}

/// 1-based row-major location of a detection among all detections of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for GridPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_is_converted_to_enclosing_box() {
        let quad = [[12.0, 40.0], [98.0, 38.0], [100.0, 70.0], [10.0, 72.0]];
        let bbox = BoundingBox::from_quad(&quad);
        assert_eq!(bbox, BoundingBox::new(10.0, 38.0, 90.0, 34.0));
    }

    #[test]
    fn grid_position_displays_row_then_column() {
        assert_eq!(GridPosition::new(2, 3).to_string(), "(2,3)");
    }

    #[test]
    fn detection_deserializes_without_confidence() {
        let json = r#"{"text":"CD88888","confidence":null,"bbox":{"x":1,"y":2,"width":3,"height":4}}"#;
        let det: Detection = serde_json::from_str(json).expect("valid detection json");
        assert_eq!(det.text, "CD88888");
        assert!(det.confidence.is_none());
        assert_eq!(det.bbox.y, 2.0);
    }
}
