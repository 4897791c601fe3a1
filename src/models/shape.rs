// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Markup shape data structures.
//!
//! This module defines the tagged shape variants reviewers can draw on top
//! of a media asset, and the fixed stroke color palette offered by the
//! toolbar.

use serde::{Deserialize, Serialize};

/// Stroke color palette. Fixed set; every value has a defined hex form so
/// payloads stay stable across clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeColor {
    White,
    Black,
    Red,
    Blue,
    Purple,
    Green,
    Pink,
    Yellow,
    Cyan,
    Zinc,
}

impl ShapeColor {
    /// All palette colors in toolbar order.
    pub const ALL: [ShapeColor; 10] = [
        ShapeColor::White,
        ShapeColor::Black,
        ShapeColor::Red,
        ShapeColor::Blue,
        ShapeColor::Purple,
        ShapeColor::Green,
        ShapeColor::Pink,
        ShapeColor::Yellow,
        ShapeColor::Cyan,
        ShapeColor::Zinc,
    ];

    /// CSS hex value for this color.
    pub fn hex(&self) -> &'static str {
        match self {
            ShapeColor::White => "#ffffff",
            ShapeColor::Black => "#000000",
            ShapeColor::Red => "#ef4444",
            ShapeColor::Blue => "#3b82f6",
            ShapeColor::Purple => "#a855f7",
            ShapeColor::Green => "#22c55e",
            ShapeColor::Pink => "#ec4899",
            ShapeColor::Yellow => "#eab308",
            ShapeColor::Cyan => "#06b6d4",
            ShapeColor::Zinc => "#71717a",
        }
    }

    /// RGB components of the hex value.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ShapeColor::White => (0xff, 0xff, 0xff),
            ShapeColor::Black => (0x00, 0x00, 0x00),
            ShapeColor::Red => (0xef, 0x44, 0x44),
            ShapeColor::Blue => (0x3b, 0x82, 0xf6),
            ShapeColor::Purple => (0xa8, 0x55, 0xf7),
            ShapeColor::Green => (0x22, 0xc5, 0x5e),
            ShapeColor::Pink => (0xec, 0x48, 0x99),
            ShapeColor::Yellow => (0xea, 0xb3, 0x08),
            ShapeColor::Cyan => (0x06, 0xb6, 0xd4),
            ShapeColor::Zinc => (0x71, 0x71, 0x7a),
        }
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        ShapeColor::Red
    }
}

/// Kind discriminant for a shape, independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Arrow,
}

/// A single drawn markup shape.
///
/// `points` is an ordered, even-length sequence of flat (x, y) pairs in the
/// media's natural pixel space, independent of the on-screen rendered size.
/// A committed shape always has at least 2 points (4 numbers); shorter
/// shapes are discarded before they reach history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Freehand polyline.
    Line { color: ShapeColor, points: Vec<f32> },
    /// Straight arrow from its first point to its last.
    Arrow { color: ShapeColor, points: Vec<f32> },
}

impl Shape {
    /// Create a new shape seeded with the pointer-down position.
    pub fn new(kind: ShapeKind, color: ShapeColor, x: f32, y: f32) -> Self {
        let points = vec![x, y];
        match kind {
            ShapeKind::Line => Shape::Line { color, points },
            ShapeKind::Arrow => Shape::Arrow { color, points },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Arrow { .. } => ShapeKind::Arrow,
        }
    }

    pub fn color(&self) -> ShapeColor {
        match self {
            Shape::Line { color, .. } | Shape::Arrow { color, .. } => *color,
        }
    }

    /// Flat (x, y) pairs in natural pixel space.
    pub fn points(&self) -> &[f32] {
        match self {
            Shape::Line { points, .. } | Shape::Arrow { points, .. } => points,
        }
    }

    pub fn points_mut(&mut self) -> &mut Vec<f32> {
        match self {
            Shape::Line { points, .. } | Shape::Arrow { points, .. } => points,
        }
    }

    /// Number of (x, y) pairs.
    pub fn point_count(&self) -> usize {
        self.points().len() / 2
    }

    /// Shift every stored coordinate by (dx, dy), baking a drag offset
    /// into absolute geometry.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        for (i, value) in self.points_mut().iter_mut().enumerate() {
            *value += if i % 2 == 0 { dx } else { dy };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shape_seeds_down_point() {
        let shape = Shape::new(ShapeKind::Line, ShapeColor::Red, 100.0, 100.0);
        assert_eq!(shape.points(), &[100.0, 100.0]);
        assert_eq!(shape.point_count(), 1);
        assert_eq!(shape.kind(), ShapeKind::Line);
    }

    #[test]
    fn test_translate_offsets_all_pairs() {
        let mut shape = Shape::Arrow {
            color: ShapeColor::Blue,
            points: vec![0.0, 0.0, 50.0, 50.0],
        };
        shape.translate(10.0, -5.0);
        assert_eq!(shape.points(), &[10.0, -5.0, 60.0, 45.0]);
    }

    #[test]
    fn test_serde_tagged_form() {
        let shape = Shape::Line {
            color: ShapeColor::Red,
            points: vec![1.0, 2.0, 3.0, 4.0],
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(
            json,
            r#"{"type":"line","color":"red","points":[1.0,2.0,3.0,4.0]}"#
        );
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_palette_hex_matches_rgb() {
        for color in ShapeColor::ALL {
            let (r, g, b) = color.rgb();
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            assert_eq!(hex, color.hex());
        }
    }
}
