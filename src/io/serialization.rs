// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Review document serialization and deserialization.
//!
//! This module handles exporting and importing review documents in YAML
//! and JSON formats.

use crate::models::comment::ReviewData;
use anyhow::Result;
use std::path::Path;

/// Export a review document to YAML format.
pub fn export_yaml(data: &ReviewData, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(data)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a review document to JSON format.
pub fn export_json(data: &ReviewData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a review document from YAML format.
pub fn import_yaml(path: &Path) -> Result<ReviewData> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// Import a review document from JSON format.
pub fn import_json(path: &Path) -> Result<ReviewData> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use crate::models::comment::{Comment, ReviewData, ShapePayload};
    use crate::models::shape::{Shape, ShapeColor, ShapeKind};

    #[test]
    fn test_comment_omits_empty_optionals() {
        let comment = Comment {
            id: 1,
            message: "looks off-brand".to_string(),
            time_range: None,
            annotation: None,
        };

        let json = serde_json::to_string(&comment).unwrap();
        assert!(!json.contains("time_range"));
        assert!(!json.contains("annotation"));
    }

    #[test]
    fn test_comment_payload_wire_format() {
        let mut shape = Shape::new(ShapeKind::Arrow, ShapeColor::Blue, 10.0, 20.0);
        shape.points_mut().extend_from_slice(&[30.0, 40.0]);
        let comment = Comment {
            id: 2,
            message: "move this".to_string(),
            time_range: None,
            annotation: Some(ShapePayload {
                shapes: vec![shape],
            }),
        };

        let json = serde_json::to_string(&comment).unwrap();
        assert!(json.contains(r#""annotation":{"shapes":[{"type":"arrow""#));
    }

    #[test]
    fn test_import_review_document() {
        let yaml = r#"
media_file: stills/hero_banner.png
natural_width: 1920
natural_height: 1080
comments:
  - id: 1
    message: logo too small
    annotation:
      shapes:
        - type: line
          color: red
          points: [100.0, 100.0, 110.0, 110.0]
"#;
        let data: ReviewData = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(data.media_file, "stills/hero_banner.png");
        assert_eq!((data.natural_width, data.natural_height), (1920, 1080));
        assert_eq!(data.comments.len(), 1);
        assert_eq!(data.comments[0].time_range, None);

        let payload = data.comments[0].annotation.as_ref().unwrap();
        assert_eq!(payload.shapes[0].kind(), ShapeKind::Line);
        assert_eq!(payload.shapes[0].color(), ShapeColor::Red);
        assert_eq!(payload.shapes[0].point_count(), 2);
        assert_eq!(data.next_comment_id(), 2);
    }
}
