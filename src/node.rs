use crate::animation::{Curve, TweenablePoint};
use crate::color::{fill_color, Color};
use crate::geometry::{arc_center, Circle};
use glam::Vec2;

/// A curve attached to a node, tagged by the value type it drives.
#[derive(Clone, Debug)]
pub enum AttachedCurve {
    Path(Curve<Circle>),
    Scale(Curve<f32>),
    Position(Curve<TweenablePoint>),
    Opacity(Curve<f32>),
}

/// One visual circle in the radial arrangement.
///
/// Owns its expanded shape, its interpolated fill, and whatever curves are
/// currently attached under string keys (attaching under an existing key
/// replaces the previous curve, as the compositor does).
#[derive(Clone, Debug)]
pub struct Node {
    pub index: usize,
    pub expanded: Circle,
    pub fill: Color,
    animations: Vec<(&'static str, AttachedCurve)>,
}

impl Node {
    pub fn new(index: usize, expanded: Circle, fill: Color) -> Self {
        Self {
            index,
            expanded,
            fill,
            animations: Vec::new(),
        }
    }

    pub fn add_animation(&mut self, key: &'static str, curve: AttachedCurve) {
        if let Some(slot) = self.animations.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = curve;
        } else {
            self.animations.push((key, curve));
        }
    }

    pub fn remove_all_animations(&mut self) {
        self.animations.clear();
    }

    pub fn animation(&self, key: &str) -> Option<&AttachedCurve> {
        self.animations
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| c)
    }

    pub fn animations(&self) -> impl Iterator<Item = &AttachedCurve> {
        self.animations.iter().map(|(_, c)| c)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}

/// The ordered ring of nodes.
///
/// Always rebuilt in full from the current configuration; there are no
/// partial updates, so indices, positions and fills stay consistent.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
    nodes: Vec<Node>,
}

impl NodeSet {
    pub fn build(
        count: usize,
        ring_radius: f32,
        view_center: Vec2,
        base_color: Color,
        alpha: f32,
    ) -> Self {
        let nodes = (0..count)
            .map(|index| {
                let center = arc_center(index, count, ring_radius, view_center);
                Node::new(
                    index,
                    Circle::new(center, ring_radius),
                    fill_color(index, count, base_color, alpha),
                )
            })
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }
}
