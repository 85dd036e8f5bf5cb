//! # Easing Module
//!
//! Cubic bezier easing curves and the preset control-point table.
//!
//! Every curve maps normalized time `x` (0.0 to 1.0) to progress via a unit
//! bezier with two inner control points. Presets are keyed by curve family
//! and ease direction so call sites never spell raw control points.

use glam::Vec2;
use keyframe::EasingFunction;
use serde::{Deserialize, Serialize};

/// Easing curve families, ordered from gentle to aggressive acceleration.
///
/// See <http://easings.net> for reference shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveFamily {
    Sine,
    Quad,
    Cubic,
    Quart,
    Quint,
    Expo,
    Circ,
    Back,
}

/// Which end of the transition the acceleration applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

/// A unit-interval cubic bezier easing function.
///
/// Endpoints are fixed at (0,0) and (1,1); `p1` and `p2` are the inner
/// control points. Progress coordinates may leave [0, 1] (Back, Expo) to
/// produce overshoot. Time coordinates are clamped to [0, 1] at
/// construction: the compositor requires x(t) to be monotonic, and an
/// out-of-range time coordinate would make the curve multivalued.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl CubicBezier {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            p1: Vec2::new(x1.clamp(0.0, 1.0), y1),
            p2: Vec2::new(x2.clamp(0.0, 1.0), y2),
        }
    }

    /// Looks up the preset control points for a family/direction pair.
    pub fn preset(family: CurveFamily, direction: EaseDirection) -> Self {
        use CurveFamily::*;
        match direction {
            EaseDirection::In => match family {
                Sine => Self::new(0.45, 0.00, 1.00, 1.00),
                Quad => Self::new(0.43, 0.00, 0.82, 0.60),
                Cubic => Self::new(0.67, 0.00, 0.84, 0.54),
                Quart => Self::new(0.81, 0.00, 0.77, 0.34),
                Quint => Self::new(0.89, 0.00, 0.81, 0.27),
                Expo => Self::new(1.04, 0.00, 0.88, 0.49),
                Circ => Self::new(0.60, 0.00, 1.00, 0.45),
                Back => Self::new(0.77, -0.63, 1.00, 1.00),
            },
            EaseDirection::Out => match family {
                Sine => Self::new(0.00, 0.00, 0.55, 1.00),
                Quad => Self::new(0.18, 0.40, 0.57, 1.00),
                Cubic => Self::new(0.16, 0.46, 0.33, 1.00),
                Quart => Self::new(0.23, 0.66, 0.19, 1.00),
                Quint => Self::new(0.19, 0.73, 0.11, 1.00),
                Expo => Self::new(0.12, 0.51, -0.40, 1.00),
                Circ => Self::new(1.00, 0.55, 0.40, 1.00),
                Back => Self::new(0.00, 0.00, 0.23, 1.37),
            },
            EaseDirection::InOut => match family {
                Sine => Self::new(0.45, 0.00, 0.55, 1.00),
                Quad => Self::new(0.43, 0.00, 0.57, 1.00),
                Cubic => Self::new(0.65, 0.00, 0.35, 1.00),
                Quart => Self::new(0.81, 0.00, 0.19, 1.00),
                Quint => Self::new(0.90, 0.00, 0.10, 1.00),
                Expo => Self::new(0.95, 0.00, 0.05, 1.00),
                Circ => Self::new(0.82, 0.00, 0.18, 1.00),
                Back => Self::new(0.77, -0.63, 0.23, 1.37),
            },
        }
    }

    /// Evaluates progress at normalized time `x`.
    ///
    /// The bezier gives x(t) and y(t) parametrically; t for a given x is
    /// recovered with Newton-Raphson, then y(t) is the eased progress.
    /// Where the time polynomial is too flat for Newton to converge, the
    /// solve falls back to bisection (x(t) is monotonic, so a bracket on
    /// [0, 1] always exists).
    pub fn progress(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        let mut t = x;
        for _ in 0..8 {
            let err = self.x_at(t) - x;
            if err.abs() < 1e-4 {
                break;
            }

            let one_minus_t = 1.0 - t;
            let dx_dt = 3.0 * one_minus_t * one_minus_t * self.p1.x
                + 6.0 * one_minus_t * t * (self.p2.x - self.p1.x)
                + 3.0 * t * t * (1.0 - self.p2.x);

            if dx_dt.abs() < 1e-6 {
                break;
            }
            t -= err / dx_dt;
        }

        if !(0.0..=1.0).contains(&t) || (self.x_at(t) - x).abs() > 1e-3 {
            let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
            for _ in 0..32 {
                let mid = 0.5 * (lo + hi);
                if self.x_at(mid) < x {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            t = 0.5 * (lo + hi);
        }

        self.y_at(t)
    }

    fn x_at(&self, t: f32) -> f32 {
        let one_minus_t = 1.0 - t;
        3.0 * one_minus_t * one_minus_t * t * self.p1.x
            + 3.0 * one_minus_t * t * t * self.p2.x
            + t * t * t
    }

    fn y_at(&self, t: f32) -> f32 {
        let one_minus_t = 1.0 - t;
        3.0 * one_minus_t * one_minus_t * t * self.p1.y
            + 3.0 * one_minus_t * t * t * self.p2.y
            + t * t * t
    }
}

impl Default for CubicBezier {
    /// Linear easing (control points on the diagonal).
    fn default() -> Self {
        Self::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0)
    }
}

impl EasingFunction for CubicBezier {
    fn y(&self, x: f64) -> f64 {
        self.progress(x as f32) as f64
    }
}
