// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Freehand path simplification.
//!
//! Ramer-Douglas-Peucker over flat (x, y) pairs, keyed on point-to-segment
//! distance (the high-quality variant: no radial pre-filter). Used to thin
//! dense pointer traces before a line shape is committed.

use super::geometry::sq_segment_distance;

/// Reduce a flat natural-space point sequence to a visually equivalent,
/// shorter sequence. The first and last points are always preserved
/// exactly; sequences with fewer than 3 points are returned unchanged.
///
/// Pure and deterministic. A dangling odd coordinate is never read as a
/// point and is dropped when simplification runs.
pub fn simplify(points: &[f32], tolerance: f32) -> Vec<f32> {
    let pairs = points.len() / 2;
    if pairs < 3 {
        return points.to_vec();
    }

    let mut kept = vec![false; pairs];
    kept[0] = true;
    kept[pairs - 1] = true;
    mark_kept(points, 0, pairs - 1, tolerance * tolerance, &mut kept);

    let mut out = Vec::with_capacity(points.len());
    for (i, keep) in kept.iter().enumerate() {
        if *keep {
            out.push(points[i * 2]);
            out.push(points[i * 2 + 1]);
        }
    }
    out
}

/// Mark the interior point farthest from the (first, last) chord when it
/// exceeds the tolerance, then recurse into both halves.
fn mark_kept(points: &[f32], first: usize, last: usize, sq_tolerance: f32, kept: &mut [bool]) {
    let ax = points[first * 2];
    let ay = points[first * 2 + 1];
    let bx = points[last * 2];
    let by = points[last * 2 + 1];

    let mut max_sq = sq_tolerance;
    let mut index = None;
    for i in (first + 1)..last {
        let d = sq_segment_distance(points[i * 2], points[i * 2 + 1], ax, ay, bx, by);
        if d > max_sq {
            max_sq = d;
            index = Some(i);
        }
    }

    if let Some(i) = index {
        kept[i] = true;
        if i - first > 1 {
            mark_kept(points, first, i, sq_tolerance, kept);
        }
        if last - i > 1 {
            mark_kept(points, i, last, sq_tolerance, kept);
        }
    }
}
