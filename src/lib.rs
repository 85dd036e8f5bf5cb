//! # Breathe View
//!
//! `breathe-view` is a headless model of a radial "breathing" widget: a ring
//! of circle nodes around a center point that shrink, rotate, move and fade
//! in a looping animation.
//!
//! The crate owns the math a host compositor would otherwise hide: ring
//! placement, an index-interpolated fill gradient, cubic bezier easing with
//! a preset control-point table, and declarative from/to curves with repeat,
//! autoreverse and fill semantics. Rendering stays with the host; every
//! frame is a pure function of elapsed time via [`BreatheView::sample`].
//!
//! ## Usage
//!
//! ```rust
//! use breathe_view::{BreatheConfig, BreatheView};
//! use kurbo::Rect;
//!
//! # fn main() -> Result<(), breathe_view::BreatheError> {
//! let mut view = BreatheView::new(
//!     Rect::new(0.0, 0.0, 400.0, 400.0),
//!     BreatheConfig::default(),
//! )?;
//! view.set_node_count(6);
//! view.start_animations();
//! let frame = view.sample(1.25);
//! assert_eq!(frame.nodes.len(), 6);
//! # Ok(())
//! # }
//! ```

/// Declarative animation curves and the stock presets.
pub mod animation;

/// Float RGBA color and the node fill gradient.
pub mod color;

/// Cubic bezier easing and the preset control-point table.
pub mod easing;

pub mod errors;

/// Ring placement and the circle primitive.
pub mod geometry;

/// Nodes and the full-rebuild node set.
pub mod node;

/// The widget: configuration, state machine, per-frame sampling.
pub mod view;

pub use animation::{Curve, CurveDescriptor, Property, RepeatPolicy};
pub use color::Color;
pub use easing::{CubicBezier, CurveFamily, EaseDirection};
pub use errors::BreatheError;
pub use geometry::Circle;
pub use node::{AttachedCurve, Node, NodeSet};
pub use view::{BreatheConfig, BreatheView, CurveSet, Frame, NodeFrame};
