// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the point-to-segment distance primitive shared by
//! the path simplifier and by canvas hit-testing.

/// Squared distance from point (px, py) to the segment (ax, ay)-(bx, by).
///
/// Degenerate segments (both endpoints equal) fall back to point distance.
pub fn sq_segment_distance(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    let (cx, cy) = if len_sq <= f32::EPSILON {
        (ax, ay)
    } else {
        let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
        (ax + t * dx, ay + t * dy)
    };

    let ex = px - cx;
    let ey = py - cy;
    ex * ex + ey * ey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular_projection() {
        // Point directly above the middle of a horizontal segment.
        let d = sq_segment_distance(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_clamps_to_endpoints() {
        // Projection falls before the segment start; distance is to (0, 0).
        let d = sq_segment_distance(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_segment() {
        let d = sq_segment_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 25.0).abs() < 1e-5);
    }

    #[test]
    fn test_on_segment_is_zero() {
        let d = sq_segment_distance(5.0, 0.0, 0.0, 0.0, 10.0, 0.0);
        assert!(d.abs() < 1e-6);
    }
}
