use crate::easing::CubicBezier;
use glam::Vec2;
use keyframe::{CanTween, EasingFunction};
use serde::{Deserialize, Serialize};

/// The animatable property a curve drives, mirroring compositor key paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Path,
    Scale,
    Rotation,
    Position,
    Opacity,
}

impl Property {
    pub fn key_path(&self) -> &'static str {
        match self {
            Property::Path => "path",
            Property::Scale => "transform.scale",
            Property::Rotation => "transform.rotation",
            Property::Position => "position",
            Property::Opacity => "opacity",
        }
    }
}

/// How a curve repeats once its forward (and reverse) pass completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatPolicy {
    None,
    Infinite,
}

/// A wrapper for `Vec2` that implements `CanTween`, for position curves.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TweenablePoint(pub Vec2);

impl CanTween for TweenablePoint {
    fn ease(from: Self, to: Self, time: impl keyframe::num_traits::Float) -> Self {
        let t = time.to_f64().unwrap() as f32;
        TweenablePoint(from.0.lerp(to.0, t))
    }
}

/// The serializable, value-free view of a [`Curve`]: everything about its
/// timing, none of its endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveDescriptor {
    pub property: Property,
    pub duration: f64,
    /// Timing control points as (x1, y1, x2, y2).
    pub control_points: [f32; 4],
    pub repeat: RepeatPolicy,
    pub autoreverse: bool,
    pub fill_forward: bool,
}

impl CurveDescriptor {
    pub fn timing(&self) -> CubicBezier {
        let [x1, y1, x2, y2] = self.control_points;
        CubicBezier::new(x1, y1, x2, y2)
    }
}

/// A declarative from/to transition over one property.
///
/// The host compositor owns the clock; `value_at` reproduces its timeline
/// semantics (repeat, autoreverse, fill) as a pure function of elapsed time.
#[derive(Clone, Debug)]
pub struct Curve<T> {
    pub property: Property,
    pub from: T,
    pub to: T,
    /// Length of one forward pass in seconds.
    pub duration: f64,
    pub timing: CubicBezier,
    pub repeat: RepeatPolicy,
    /// Run forward then backward within each repeat cycle.
    pub autoreverse: bool,
    /// Hold the final value after a finite curve ends, instead of snapping
    /// back to the model value.
    pub fill_forward: bool,
}

impl<T> Curve<T>
where
    T: CanTween + Clone,
{
    pub fn new(property: Property, from: T, to: T, duration: f64, timing: CubicBezier) -> Self {
        Self {
            property,
            from,
            to,
            duration,
            timing,
            repeat: RepeatPolicy::None,
            autoreverse: false,
            fill_forward: false,
        }
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = RepeatPolicy::Infinite;
        self
    }

    pub fn autoreversing(mut self) -> Self {
        self.autoreverse = true;
        self
    }

    pub fn filling_forward(mut self) -> Self {
        self.fill_forward = true;
        self
    }

    /// The scalar configuration of this curve, without its endpoint values.
    pub fn descriptor(&self) -> CurveDescriptor {
        CurveDescriptor {
            property: self.property,
            duration: self.duration,
            control_points: [
                self.timing.p1.x,
                self.timing.p1.y,
                self.timing.p2.x,
                self.timing.p2.y,
            ],
            repeat: self.repeat,
            autoreverse: self.autoreverse,
            fill_forward: self.fill_forward,
        }
    }

    /// One repeat cycle: a forward pass, plus the reverse pass if any.
    pub fn cycle_duration(&self) -> f64 {
        if self.autoreverse {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    /// Value the property settles on once the curve has finished.
    fn resting_value(&self) -> T {
        if self.autoreverse {
            self.from.clone()
        } else {
            self.to.clone()
        }
    }

    /// Samples the curve at `elapsed` seconds since it was attached.
    pub fn value_at(&self, elapsed: f64) -> T {
        if elapsed <= 0.0 {
            return self.from.clone();
        }
        if self.duration <= 0.0 {
            // Degenerate instant animation.
            return self.resting_value();
        }

        let cycle = self.cycle_duration();
        let local = match self.repeat {
            RepeatPolicy::Infinite => elapsed % cycle,
            RepeatPolicy::None => {
                if elapsed >= cycle {
                    return if self.fill_forward {
                        self.resting_value()
                    } else {
                        // Removed on completion: the layer shows its model value.
                        self.from.clone()
                    };
                }
                elapsed
            }
        };

        let x = if self.autoreverse && local > self.duration {
            2.0 - local / self.duration
        } else {
            local / self.duration
        };
        let progress = self.timing.y(x);
        T::ease(self.from.clone(), self.to.clone(), progress)
    }
}

/// Ready-made curves matching the widget's stock breathing motion.
pub mod presets {
    use super::{Curve, Property, TweenablePoint};
    use crate::easing::CubicBezier;
    use crate::geometry::Circle;
    use glam::Vec2;
    use std::f32::consts::{PI, TAU};

    /// Forward-pass length of the path-morph curve set, in seconds.
    pub const PATH_MORPH_DURATION: f64 = 3.55;
    /// Forward-pass length of the transform curve set, in seconds.
    pub const TRANSFORM_DURATION: f64 = 3.85;
    /// Scale target of the transform set's shrink.
    pub const TRANSFORM_SCALE_FLOOR: f32 = 0.25;
    /// Radius ratio of the path-morph set's shrunk circle.
    pub const PATH_MORPH_SHRINK_RATIO: f32 = 0.1;

    /// Morphs a node's path from its expanded circle to the shared shrunk
    /// circle at the view center, and back, forever.
    pub fn path_morph(
        expanded: Circle,
        shrunk: Circle,
        duration: f64,
        timing: CubicBezier,
    ) -> Curve<Circle> {
        Curve::new(Property::Path, expanded, shrunk, duration, timing)
            .repeating()
            .autoreversing()
            .filling_forward()
    }

    /// Uniform shrink of a node and back, forever.
    pub fn scale_down(scale_floor: f32, duration: f64, timing: CubicBezier) -> Curve<f32> {
        Curve::new(Property::Scale, 1.0, scale_floor, duration, timing)
            .repeating()
            .autoreversing()
            .filling_forward()
    }

    /// Full container turn (0 → -2π) and back, forever.
    pub fn rotate_full_turn(duration: f64, timing: CubicBezier) -> Curve<f32> {
        Curve::new(Property::Rotation, 0.0, -TAU, duration, timing)
            .repeating()
            .autoreversing()
    }

    /// Partial container turn (0 → -0.75π) and back, forever.
    pub fn rotate_partial_turn(duration: f64, timing: CubicBezier) -> Curve<f32> {
        Curve::new(Property::Rotation, 0.0, -PI * 0.75, duration, timing)
            .repeating()
            .autoreversing()
    }

    /// Moves a node between two points and back, forever.
    pub fn move_and_reverse(
        from: Vec2,
        to: Vec2,
        duration: f64,
        timing: CubicBezier,
    ) -> Curve<TweenablePoint> {
        Curve::new(
            Property::Position,
            TweenablePoint(from),
            TweenablePoint(to),
            duration,
            timing,
        )
        .repeating()
        .autoreversing()
    }

    /// Ghost-layer shrink: slower than the main set, one-way per cycle.
    pub fn ghost_scale_down(duration: f64, timing: CubicBezier) -> Curve<f32> {
        Curve::new(Property::Scale, 1.0, 0.5, duration + 1.0, timing)
            .repeating()
            .filling_forward()
    }

    /// Ghost-layer fade: half the base duration, runs once and holds.
    pub fn ghost_fade_out(duration: f64, timing: CubicBezier) -> Curve<f32> {
        Curve::new(Property::Opacity, 1.0, 0.0, duration / 2.0, timing).filling_forward()
    }
}
