//! Maze-like alternative layout
//!
//! Key points are snapped to a square grid and joined by axis-aligned paths
//! (X first, then Y), one grid cell per step. Work happens on integer grid
//! indices so positions never drift off the grid.

use glam::{IVec2, Vec2};

use crate::error::{GenError, Result};

/// Nearest grid node index for a world position
pub fn snap_to_grid(point: Vec2, cell: f32) -> IVec2 {
    (point / cell).round().as_ivec2()
}

/// Join the snapped key points into a closed orthogonal loop
///
/// Consecutive outputs, wrap edge included, are exactly `cell` apart unless the
/// whole loop collapses onto a single node. Legs that cross or retrace revisit
/// nodes, so positions may repeat.
pub fn fill_orthogonal(key_points: &[Vec2], cell: f32) -> Result<Vec<Vec2>> {
    if !(cell > 0.0) {
        return Err(GenError::NonPositiveGap { max_gap: cell });
    }

    let mut nodes: Vec<IVec2> = key_points.iter().map(|&p| snap_to_grid(p, cell)).collect();
    nodes.dedup();
    // Closing duplicates (last node snapped onto the first)
    while nodes.len() > 1 && nodes.first() == nodes.last() {
        nodes.pop();
    }

    let n = nodes.len();
    let mut path: Vec<IVec2> = Vec::new();
    for i in 0..n {
        walk(&mut path, nodes[i], nodes[(i + 1) % n]);
    }

    Ok(path.into_iter().map(|g| g.as_vec2() * cell).collect())
}

/// Push `from` and every node on the way to `to`, excluding `to`
fn walk(path: &mut Vec<IVec2>, from: IVec2, to: IVec2) {
    let mut cursor = from;
    path.push(cursor);

    let step_x = (to.x - cursor.x).signum();
    while cursor.x != to.x {
        cursor.x += step_x;
        if cursor != to {
            path.push(cursor);
        }
    }

    let step_y = (to.y - cursor.y).signum();
    while cursor.y != to.y {
        cursor.y += step_y;
        if cursor != to {
            path.push(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procgen::gap::max_cyclic_gap;

    #[test]
    fn test_square_loop() {
        let keys = [
            Vec2::new(0.0, 0.0),
            Vec2::new(60.0, 0.0),
            Vec2::new(60.0, 40.0),
        ];
        let filled = fill_orthogonal(&keys, 20.0).unwrap();

        // 3 steps right, 2 up, then back along X (3) and down Y (2)
        assert_eq!(filled.len(), 10);
        assert_eq!(filled[0], Vec2::ZERO);
        assert_eq!(filled[3], Vec2::new(60.0, 0.0));
        assert_eq!(filled[5], Vec2::new(60.0, 40.0));
        assert_eq!(*filled.last().unwrap(), Vec2::new(0.0, 20.0));

        for (i, p) in filled.iter().enumerate() {
            let q = filled[(i + 1) % filled.len()];
            assert_eq!(p.distance(q), 20.0, "step {i}: {p} -> {q}");
        }
    }

    #[test]
    fn test_points_snap_to_nearest_node() {
        assert_eq!(snap_to_grid(Vec2::new(29.0, -31.0), 20.0), IVec2::new(1, -2));
        assert_eq!(snap_to_grid(Vec2::new(-9.0, 9.0), 20.0), IVec2::new(0, 0));
    }

    #[test]
    fn test_collapsed_loop_is_single_node() {
        let keys = [Vec2::new(1.0, 1.0), Vec2::new(-2.0, 3.0), Vec2::new(4.0, -4.0)];
        let filled = fill_orthogonal(&keys, 50.0).unwrap();
        assert_eq!(filled, vec![Vec2::ZERO]);
    }

    #[test]
    fn test_ring_keys_stay_within_one_cell() {
        let keys = crate::procgen::ring::generate_key_points(42, 16, 300.0, 0.4).unwrap();
        let filled = fill_orthogonal(&keys, 32.0).unwrap();
        assert!(max_cyclic_gap(&filled) <= 32.0 + 1e-4);
        assert!(filled.iter().all(|p| p.x % 32.0 == 0.0 && p.y % 32.0 == 0.0));
    }

    #[test]
    fn test_non_positive_cell_fails() {
        assert!(matches!(
            fill_orthogonal(&[Vec2::ZERO], 0.0),
            Err(GenError::NonPositiveGap { .. })
        ));
    }
}
