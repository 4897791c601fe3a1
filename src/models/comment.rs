// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Review comments and the serializable review document.
//!
//! A comment optionally carries the markup drawn while it was composed, and
//! an optional timestamp range for time-based media (video, audio).

use super::shape::Shape;
use serde::{Deserialize, Serialize};

/// Markup attached to a comment, serialized as `{"shapes": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePayload {
    pub shapes: Vec<Shape>,
}

/// A reviewer comment pinned to the active media asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub message: String,
    /// Start/end seconds for time-based media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<(f32, f32)>,
    /// Markup drawn while this comment was composed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<ShapePayload>,
}

/// Complete review document for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewData {
    pub media_file: String,
    pub natural_width: u32,
    pub natural_height: u32,
    pub comments: Vec<Comment>,
}

impl ReviewData {
    /// Create a new review for the given media file and dimensions.
    pub fn new(media_file: String, natural_width: u32, natural_height: u32) -> Self {
        Self {
            media_file,
            natural_width,
            natural_height,
            comments: Vec::new(),
        }
    }

    /// Next unused comment id.
    pub fn next_comment_id(&self) -> u64 {
        self.comments.iter().map(|c| c.id).max().map_or(1, |id| id + 1)
    }
}
