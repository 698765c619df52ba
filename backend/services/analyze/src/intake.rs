//! Turns recognizer output into plate detections.

use std::sync::LazyLock;

use platerank_common::error::{PlateError, PlateResult};
use platerank_common::{BoundingBox, Detection};
use regex::Regex;
use serde::Deserialize;

static PLATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^[A-Z]{2,3}[A-Z0-9]{4,5}$",
        r"^[A-Z]{2}[0-9]{4,5}$",
        r"^[A-Z]{3}[0-9]{4}$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("static plate pattern compiles"))
    .collect()
});

/// Recognizers report either an axis-aligned rectangle or four corner points.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BoxInput {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Quad([[f64; 2]; 4]),
}

impl From<BoxInput> for BoundingBox {
    fn from(input: BoxInput) -> Self {
        match input {
            BoxInput::Rect {
                x,
                y,
                width,
                height,
            } => BoundingBox::new(x, y, width, height),
            BoxInput::Quad(points) => BoundingBox::from_quad(&points),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DetectionRecord {
    text: String,
    #[serde(default)]
    confidence: Option<f64>,
    bbox: BoxInput,
}

/// Strip everything but ASCII letters and digits and uppercase the rest.
pub fn normalize_plate_text(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Heuristic check that normalized text looks like a licence plate.
pub fn is_likely_plate(text: &str) -> bool {
    if !(5..=8).contains(&text.len()) {
        return false;
    }

    let letter_count = text.chars().filter(char::is_ascii_alphabetic).count();
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    if letter_count == 0 || !has_digit {
        return false;
    }

    PLATE_PATTERNS.iter().any(|re| re.is_match(text)) || (2..=4).contains(&letter_count)
}

/// Parse a JSON array of recognizer records and keep the plate-like ones,
/// in input order, with normalized text.
pub fn parse_detections(raw: &str) -> PlateResult<Vec<Detection>> {
    let records: Vec<DetectionRecord> = serde_json::from_str(raw)
        .map_err(|e| PlateError::Validation(format!("invalid detections file: {e}")))?;

    let total = records.len();
    let mut plates = Vec::with_capacity(total);
    for record in records {
        let text = normalize_plate_text(&record.text);
        if !is_likely_plate(&text) {
            tracing::warn!(raw = %record.text, normalized = %text, "dropping non-plate text");
            continue;
        }
        plates.push(Detection::new(text, record.confidence, record.bbox.into()));
    }

    tracing::info!(records = total, plates = plates.len(), "detections loaded");
    Ok(plates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_and_uppercases() {
        assert_eq!(normalize_plate_text(" cd·88 888\n"), "CD88888");
        assert_eq!(normalize_plate_text("川A-12345"), "A12345");
    }

    #[test]
    fn common_plate_shapes_are_accepted() {
        for plate in ["CDP5747", "CD82694", "CDL3034", "CD32024"] {
            assert!(is_likely_plate(plate), "{plate}");
        }
    }

    #[test]
    fn non_plates_are_rejected() {
        assert!(!is_likely_plate("CD12"));
        assert!(!is_likely_plate("ABCDEFG"));
        assert!(!is_likely_plate("1234567"));
        assert!(!is_likely_plate("ABCDEFGH1"));
    }

    #[test]
    fn lenient_fallback_accepts_two_to_four_letters() {
        // Digits first does not match any strict pattern.
        assert!(is_likely_plate("12AB345"));
        assert!(!is_likely_plate("1ABCDE2"));
    }

    #[test]
    fn parses_rect_and_quad_boxes() {
        let raw = r#"[
            {"text": "cd 88888", "confidence": 0.97, "bbox": {"x": 10, "y": 20, "width": 90, "height": 30}},
            {"text": "CDP4444", "bbox": [[200, 18], [290, 18], [290, 50], [200, 50]]},
            {"text": "PARKING", "confidence": 0.5, "bbox": {"x": 0, "y": 0, "width": 1, "height": 1}}
        ]"#;
        let detections = parse_detections(raw).expect("valid detections");
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].text, "CD88888");
        assert_eq!(detections[0].confidence, Some(0.97));
        assert_eq!(detections[1].bbox, BoundingBox::new(200.0, 18.0, 90.0, 32.0));
        assert!(detections[1].confidence.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_detections(r#"{"text": "CD88888"}"#).is_err());
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(parse_detections("[]").expect("empty list").is_empty());
    }
}
