//! # Color Module
//!
//! Float RGBA color and the index-interpolated node fill.

use keyframe::CanTween;
use serde::{Deserialize, Serialize};

/// Represents a RGBA color in float format (0.0 - 1.0).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a replaced alpha component.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl CanTween for Color {
    fn ease(from: Self, to: Self, time: impl keyframe::num_traits::Float) -> Self {
        let t = time.to_f64().unwrap() as f32;
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

/// Fill color for node `index` out of `count`.
///
/// Red and blue scale by i/(N-1) against the base channels, green is held,
/// alpha is fixed by configuration. N ≤ 1 would divide by zero; a lone node
/// takes the full base channels instead.
pub fn fill_color(index: usize, count: usize, base: Color, alpha: f32) -> Color {
    let fraction = if count <= 1 {
        1.0
    } else {
        index as f32 / (count - 1) as f32
    };
    Color {
        r: fraction * base.r,
        g: base.g,
        b: fraction * base.b,
        a: alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        let c = Color::from_hex(0x1DE1F7);
        assert!((c.r - 0x1D as f32 / 255.0).abs() < 1e-6);
        assert!((c.g - 0xE1 as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xF7 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.with_alpha(0.5).a, 0.5);
        assert_eq!(c.with_alpha(0.5).r, c.r);
    }

    #[test]
    fn fill_is_monotonic_in_index() {
        let base = Color::from_hex(0x1DE1F7);
        let count = 9;
        let mut prev = fill_color(0, count, base, 0.5);
        for index in 1..count {
            let c = fill_color(index, count, base, 0.5);
            assert!(c.r >= prev.r, "red regressed at {}", index);
            assert!(c.b >= prev.b, "blue regressed at {}", index);
            assert_eq!(c.g, base.g, "green must stay fixed");
            assert_eq!(c.a, 0.5, "alpha must stay fixed");
            prev = c;
        }
    }

    #[test]
    fn single_node_gets_full_base_channels() {
        let base = Color::from_hex(0x6AC0E6);
        let c = fill_color(0, 1, base, 0.75);
        assert!(c.r.is_finite() && c.b.is_finite(), "no NaN for N=1");
        assert_eq!(c.r, base.r);
        assert_eq!(c.b, base.b);
        assert_eq!(c.a, 0.75);
    }

    #[test]
    fn gradient_spans_zero_to_base() {
        let base = Color::from_hex(0xFF00FF);
        let first = fill_color(0, 5, base, 1.0);
        let last = fill_color(4, 5, base, 1.0);
        assert_eq!(first.r, 0.0);
        assert_eq!(first.b, 0.0);
        assert!((last.r - base.r).abs() < 1e-6);
        assert!((last.b - base.b).abs() < 1e-6);
    }

    #[test]
    fn tween_midpoint_mixes_evenly() {
        let mid = Color::ease(Color::BLACK, Color::WHITE, 0.5);
        for channel in [mid.r, mid.g, mid.b] {
            assert!((channel - 0.5).abs() < 1e-6);
        }
    }
}
