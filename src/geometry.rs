//! # Geometry Module
//!
//! Ring placement math and the circle primitive the nodes are drawn from.

use glam::Vec2;
use keyframe::CanTween;
use kurbo::Shape;
use std::f32::consts::{PI, TAU};

/// Flattening tolerance when converting circles to bezier paths.
const PATH_TOLERANCE: f64 = 1e-3;

pub fn radians_from_degrees(degrees: f32) -> f32 {
    (PI * degrees) / 180.0
}

/// Center point of node `index` on a ring of `count` evenly spaced nodes.
///
/// Formula: C + r * (cos a, sin a) with a = 2π(i + 1) / N. `count == 0`
/// would divide by zero; it returns the view center instead (an empty ring
/// never places nodes, so the guard only matters for direct callers).
pub fn arc_center(index: usize, count: usize, ring_radius: f32, view_center: Vec2) -> Vec2 {
    if count == 0 {
        return view_center;
    }
    let angle = TAU * (index as f32 + 1.0) / count as f32;
    view_center + ring_radius * Vec2::new(angle.cos(), angle.sin())
}

/// All `count` node centers, in index order.
pub fn ring_positions(count: usize, ring_radius: f32, view_center: Vec2) -> Vec<Vec2> {
    (0..count)
        .map(|index| arc_center(index, count, ring_radius, view_center))
        .collect()
}

/// A circle by center and radius.
///
/// This is the node's drawable shape in both its expanded and shrunk states,
/// and the tweenable value for path-morph animations (center and radius
/// interpolate independently).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Uniformly scaled copy around its own center.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            center: self.center,
            radius: self.radius * factor,
        }
    }

    /// Flattens to a bezier path for the host rasterizer.
    pub fn to_path(&self) -> kurbo::BezPath {
        kurbo::Circle::new(
            kurbo::Point::new(self.center.x as f64, self.center.y as f64),
            self.radius as f64,
        )
        .to_path(PATH_TOLERANCE)
    }
}

impl CanTween for Circle {
    fn ease(from: Self, to: Self, time: impl keyframe::num_traits::Float) -> Self {
        let t = time.to_f64().unwrap() as f32;
        Self {
            center: from.center.lerp(to.center, t),
            radius: from.radius + (to.radius - from.radius) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_nodes_land_on_axes() {
        // a = 2π(i+1)/4 → π/2, π, 3π/2, 2π
        let positions = ring_positions(4, 100.0, Vec2::ZERO);
        let expected = [
            Vec2::new(0.0, 100.0),
            Vec2::new(-100.0, 0.0),
            Vec2::new(0.0, -100.0),
            Vec2::new(100.0, 0.0),
        ];
        for (got, want) in positions.iter().zip(expected) {
            assert!(
                got.distance(want) < 1e-3,
                "expected {:?}, got {:?}",
                want,
                got
            );
        }
    }

    #[test]
    fn ring_positions_are_on_circle_and_evenly_spaced() {
        let center = Vec2::new(40.0, -12.5);
        let radius = 73.0;
        let count = 7;
        let positions = ring_positions(count, radius, center);
        assert_eq!(positions.len(), count);

        for p in &positions {
            let r = p.distance(center);
            assert!((r - radius).abs() < 1e-3, "radius off: {}", r);
        }

        // Consecutive angular gaps must all equal 2π/N.
        let expected_gap = TAU / count as f32;
        for window in positions.windows(2) {
            let v0 = window[0] - center;
            let v1 = window[1] - center;
            let a0 = v0.y.atan2(v0.x);
            let a1 = v1.y.atan2(v1.x);
            let gap = (a1 - a0).rem_euclid(TAU);
            assert!(
                (gap - expected_gap).abs() < 1e-3,
                "gap {} != {}",
                gap,
                expected_gap
            );
        }

        // No two coincide.
        for i in 0..count {
            for j in (i + 1)..count {
                assert!(positions[i].distance(positions[j]) > 1e-3);
            }
        }
    }

    #[test]
    fn zero_count_returns_view_center() {
        let center = Vec2::new(5.0, 5.0);
        assert_eq!(arc_center(0, 0, 50.0, center), center);
        assert!(ring_positions(0, 50.0, center).is_empty());
    }

    #[test]
    fn single_node_is_deterministic() {
        // a = 2π, so the lone node sits at angle zero on the ring.
        let p = arc_center(0, 1, 10.0, Vec2::ZERO);
        assert!(p.is_finite());
        assert!(p.distance(Vec2::new(10.0, 0.0)) < 1e-3, "got {:?}", p);
    }

    #[test]
    fn circle_tween_interpolates_center_and_radius() {
        let from = Circle::new(Vec2::new(0.0, 0.0), 100.0);
        let to = Circle::new(Vec2::new(10.0, 20.0), 10.0);
        let mid = Circle::ease(from, to, 0.5);
        assert!(mid.center.distance(Vec2::new(5.0, 10.0)) < 1e-4);
        assert!((mid.radius - 55.0).abs() < 1e-4);
    }

    #[test]
    fn circle_path_is_closed_and_nonempty() {
        let path = Circle::new(Vec2::new(1.0, 2.0), 30.0).to_path();
        assert!(!path.elements().is_empty());
    }

    #[test]
    fn degrees_convert_to_radians() {
        assert!((radians_from_degrees(180.0) - PI).abs() < 1e-6);
        assert!((radians_from_degrees(90.0) - PI / 2.0).abs() < 1e-6);
    }
}
