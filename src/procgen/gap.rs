//! Gap filling between consecutive key points
//!
//! Walks every edge of the closed loop, wrap edge included, and inserts points
//! every `max_gap` along the straight line until the remainder to the next key
//! point is at most `max_gap`. Key points keep their cyclic positions.

use glam::Vec2;

use crate::error::{GenError, Result};

/// Fill the closed loop through `key_points` so no cyclic gap exceeds `max_gap`
pub fn fill_loop(key_points: &[Vec2], max_gap: f32) -> Result<Vec<Vec2>> {
    if !(max_gap > 0.0) {
        return Err(GenError::NonPositiveGap { max_gap });
    }

    let n = key_points.len();
    let mut out = Vec::with_capacity(n);

    for (i, &start) in key_points.iter().enumerate() {
        let target = key_points[(i + 1) % n];
        out.push(start);

        let before = out.len();
        fill_edge(&mut out, start, target, max_gap);
        if out.len() > before {
            log::debug!(
                "edge {} -> {}: inserted {} points",
                i,
                (i + 1) % n,
                out.len() - before
            );
        }
    }

    Ok(out)
}

/// Append the intermediate points of one edge (endpoints excluded)
///
/// Equivalent to stepping a cursor by `max_gap` while the remainder exceeds
/// `max_gap`, but the step count is fixed up front so float drift can't stall it.
fn fill_edge(out: &mut Vec<Vec2>, start: Vec2, target: Vec2, max_gap: f32) {
    let length = start.distance(target);
    if length <= max_gap {
        return;
    }

    let dir = (target - start) / length;
    let steps = (length / max_gap).ceil() as usize - 1;
    out.extend((1..=steps).map(|k| start + dir * (k as f32 * max_gap)));
}

/// Largest distance between consecutive points, wrap edge included
pub fn max_cyclic_gap(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].distance(points[(i + 1) % n]))
        .fold(0.0, f32::max)
}
