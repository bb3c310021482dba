//! Screen-space rectangle a trigger measures the pointer against.

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};

/// Layout rectangle of a UI node in logical pixels.
///
/// Always measured fresh from the node's current layout. Holding on to one
/// across frames reintroduces stale bounds after a resize or reflow.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ReferenceRegion {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ReferenceRegion {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Reads the current layout of a node.
    ///
    /// Returns `None` for a node that has not been laid out yet (zero size).
    pub fn measure(node: &ComputedNode, transform: &UiGlobalTransform) -> Option<Self> {
        let scale = node.inverse_scale_factor();
        let size = node.size() * scale;
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        // UI transforms carry the node center in physical pixels.
        let center = transform.translation * scale;
        Some(Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        ))
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Closed-rectangle containment: edges and corners count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        (self.left..=self.right()).contains(&point.x) && (self.top..=self.bottom()).contains(&point.y)
    }
}
