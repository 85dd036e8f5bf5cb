//! # View Module
//!
//! The widget itself: configuration, the Idle/Animating state machine, and
//! per-frame sampling of whatever curves are currently attached.

use crate::animation::{presets, Curve};
use crate::color::Color;
use crate::easing::{CubicBezier, CurveFamily, EaseDirection};
use crate::errors::BreatheError;
use crate::geometry::Circle;
use crate::node::{AttachedCurve, Node, NodeSet};
use glam::Vec2;
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const SCALE_KEY: &str = "scale.animation";
const POSITION_KEY: &str = "position.animation";

/// Which stock curve set `start_animations` attaches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveSet {
    /// Per-node path morph (expanded circle → shrunk circle at the view
    /// center) plus a full container turn.
    PathMorph,
    /// Per-node uniform scale and move-to-center plus a partial container
    /// turn.
    Transform,
}

/// Widget configuration.
///
/// Defaults reproduce the stock path-morph breathing; `transform()` selects
/// the alternate replicator-style motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreatheConfig {
    pub node_count: usize,
    pub base_color: Color,
    /// Alpha applied to every node fill.
    pub node_opacity: f32,
    /// Forward-pass duration of every attached curve, in seconds.
    pub duration: f64,
    /// Shrink target: radius ratio for path morphs, scale floor for
    /// transform scaling.
    pub scale_ratio: f32,
    pub curve_set: CurveSet,
    pub easing_family: CurveFamily,
    pub easing_direction: EaseDirection,
}

impl Default for BreatheConfig {
    fn default() -> Self {
        Self {
            node_count: 8,
            base_color: Color::from_hex(0x1DE1F7),
            node_opacity: 0.5,
            duration: presets::PATH_MORPH_DURATION,
            scale_ratio: presets::PATH_MORPH_SHRINK_RATIO,
            curve_set: CurveSet::PathMorph,
            easing_family: CurveFamily::Quad,
            easing_direction: EaseDirection::InOut,
        }
    }
}

impl BreatheConfig {
    /// Stock configuration for the transform curve set.
    pub fn transform() -> Self {
        Self {
            base_color: Color::new(100.0 / 255.0, 190.0 / 255.0, 230.0 / 255.0, 1.0),
            node_opacity: 0.75,
            duration: presets::TRANSFORM_DURATION,
            scale_ratio: presets::TRANSFORM_SCALE_FLOOR,
            curve_set: CurveSet::Transform,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), BreatheError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(BreatheError::InvalidConfig(format!(
                "duration must be finite and positive, got {}",
                self.duration
            )));
        }
        if !self.scale_ratio.is_finite() || self.scale_ratio <= 0.0 {
            return Err(BreatheError::InvalidConfig(format!(
                "scale_ratio must be finite and positive, got {}",
                self.scale_ratio
            )));
        }
        if !self.node_opacity.is_finite() || !(0.0..=1.0).contains(&self.node_opacity) {
            return Err(BreatheError::InvalidConfig(format!(
                "node_opacity must be within 0..=1, got {}",
                self.node_opacity
            )));
        }
        Ok(())
    }

    fn timing(&self) -> CubicBezier {
        CubicBezier::preset(self.easing_family, self.easing_direction)
    }
}

/// One node's sampled state for the current frame.
#[derive(Clone, Debug)]
pub struct NodeFrame {
    pub index: usize,
    /// Current geometry after path morphing and position curves.
    pub circle: Circle,
    /// Uniform transform scale on top of the circle's own radius.
    pub scale: f32,
    pub opacity: f32,
    pub fill: Color,
}

impl NodeFrame {
    /// Drawable path for this frame, with the transform scale folded in.
    pub fn path(&self) -> kurbo::BezPath {
        self.circle.scaled(self.scale).to_path()
    }
}

/// A full per-frame snapshot: the container rotation plus every node.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Container rotation in radians.
    pub rotation: f32,
    pub nodes: Vec<NodeFrame>,
}

/// The breathing widget.
///
/// Owns the node ring and the attached curves, and exposes the compositor's
/// timeline as `sample(elapsed)`. All mutation happens on the caller's
/// thread; there is no clock inside.
#[derive(Clone, Debug)]
pub struct BreatheView {
    bounds: Rect,
    config: BreatheConfig,
    ring_radius: f32,
    nodes: NodeSet,
    container_rotation: Option<Curve<f32>>,
    animating: bool,
}

impl BreatheView {
    /// Builds the widget inside `bounds`. The ring radius is a quarter of
    /// the smaller bounds dimension.
    pub fn new(bounds: Rect, config: BreatheConfig) -> Result<Self, BreatheError> {
        if !(bounds.x0.is_finite()
            && bounds.y0.is_finite()
            && bounds.x1.is_finite()
            && bounds.y1.is_finite())
        {
            return Err(BreatheError::InvalidBounds(format!(
                "bounds must be finite, got {:?}",
                bounds
            )));
        }
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(BreatheError::InvalidBounds(format!(
                "bounds must have positive area, got {:?}",
                bounds
            )));
        }
        config.validate()?;

        let ring_radius = (bounds.width().min(bounds.height()) / 4.0) as f32;
        let mut view = Self {
            bounds,
            config,
            ring_radius,
            nodes: NodeSet::default(),
            container_rotation: None,
            animating: false,
        };
        view.rebuild_nodes();
        Ok(view)
    }

    pub fn config(&self) -> &BreatheConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn ring_radius(&self) -> f32 {
        self.ring_radius
    }

    pub fn view_center(&self) -> Vec2 {
        let c = self.bounds.center();
        Vec2::new(c.x as f32, c.y as f32)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of curves attached to the container itself.
    pub fn container_animation_count(&self) -> usize {
        usize::from(self.container_rotation.is_some())
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Replaces the node count and rebuilds the ring from scratch.
    ///
    /// A running animation is stopped first so no curve ever targets a stale
    /// path; the widget always comes out Idle.
    #[instrument(level = "debug", skip(self))]
    pub fn set_node_count(&mut self, count: usize) {
        if self.animating {
            self.stop_animations();
        }
        self.config.node_count = count;
        self.rebuild_nodes();
    }

    /// Attaches the configured curve set to every node and the container.
    #[instrument(level = "debug", skip(self))]
    pub fn start_animations(&mut self) {
        let timing = self.config.timing();
        let duration = self.config.duration;
        let center = self.view_center();
        let shrunk = Circle::new(center, self.ring_radius * self.config.scale_ratio);

        match self.config.curve_set {
            CurveSet::PathMorph => {
                for node in self.nodes.iter_mut() {
                    let morph = presets::path_morph(node.expanded, shrunk, duration, timing);
                    node.add_animation(SCALE_KEY, AttachedCurve::Path(morph));
                }
                self.container_rotation = Some(presets::rotate_full_turn(duration, timing));
            }
            CurveSet::Transform => {
                for node in self.nodes.iter_mut() {
                    let scale =
                        presets::scale_down(self.config.scale_ratio, duration, timing);
                    node.add_animation(SCALE_KEY, AttachedCurve::Scale(scale));
                    let travel = presets::move_and_reverse(
                        node.expanded.center,
                        center,
                        duration,
                        timing,
                    );
                    node.add_animation(POSITION_KEY, AttachedCurve::Position(travel));
                }
                self.container_rotation = Some(presets::rotate_partial_turn(duration, timing));
            }
        }
        self.animating = true;
    }

    /// Detaches every curve from every node and the container.
    #[instrument(level = "debug", skip(self))]
    pub fn stop_animations(&mut self) {
        for node in self.nodes.iter_mut() {
            node.remove_all_animations();
        }
        self.container_rotation = None;
        self.animating = false;
    }

    /// Samples the widget `elapsed` seconds after `start_animations`.
    ///
    /// Idle widgets report the static expanded layout. This is the per-frame
    /// callback a host compositor would otherwise run.
    pub fn sample(&self, elapsed: f64) -> Frame {
        let rotation = self
            .container_rotation
            .as_ref()
            .map(|curve| curve.value_at(elapsed))
            .unwrap_or(0.0);

        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let mut frame = NodeFrame {
                    index: node.index,
                    circle: node.expanded,
                    scale: 1.0,
                    opacity: 1.0,
                    fill: node.fill,
                };
                for curve in node.animations() {
                    match curve {
                        AttachedCurve::Path(c) => frame.circle = c.value_at(elapsed),
                        AttachedCurve::Scale(c) => frame.scale = c.value_at(elapsed),
                        AttachedCurve::Position(c) => {
                            frame.circle.center = c.value_at(elapsed).0
                        }
                        AttachedCurve::Opacity(c) => frame.opacity = c.value_at(elapsed),
                    }
                }
                frame
            })
            .collect();

        Frame { rotation, nodes }
    }

    fn rebuild_nodes(&mut self) {
        self.nodes = NodeSet::build(
            self.config.node_count,
            self.ring_radius,
            self.view_center(),
            self.config.base_color,
            self.config.node_opacity,
        );
        debug!(count = self.nodes.len(), "rebuilt node set");
    }
}
