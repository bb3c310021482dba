//! Magnetic variant: nodes lean toward a nearby pointer.

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};

use super::region::ReferenceRegion;
use super::spring::Spring;
use super::PointerSample;

/// Default capture radius in logical pixels.
pub const CAPTURE_RADIUS: f32 = 100.0;

/// Default fraction of the pointer offset the node follows.
pub const STRENGTH: f32 = 0.3;

/// Pulls a node toward the pointer while the pointer is within
/// `capture_radius` of the node's center.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(MagneticOffset)]
pub struct Magnetic {
    pub capture_radius: f32,
    pub strength: f32,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self {
            capture_radius: CAPTURE_RADIUS,
            strength: STRENGTH,
        }
    }
}

impl Magnetic {
    /// Offset target for a pointer, or `None` outside the capture radius.
    ///
    /// The capture disc is open: a pointer exactly `capture_radius` away is
    /// not pulled.
    pub fn pull(&self, region: ReferenceRegion, pointer: Vec2) -> Option<Vec2> {
        let delta = pointer - region.center();
        (delta.length() < self.capture_radius).then(|| delta * self.strength)
    }
}

/// Current offset target plus the spring that renders it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MagneticOffset {
    pub target: Vec2,
    pub spring: Spring,
}

impl MagneticOffset {
    /// Evaluates one pointer sample against a freshly measured region.
    ///
    /// A missing region (node gone or not laid out) leaves the target alone.
    /// Moving out of the capture radius counts as a leave.
    pub fn on_pointer_move(
        &mut self,
        magnet: &Magnetic,
        region: Option<ReferenceRegion>,
        pointer: Vec2,
    ) {
        let Some(region) = region else {
            return;
        };
        self.target = magnet.pull(region, pointer).unwrap_or(Vec2::ZERO);
    }

    pub fn on_pointer_leave(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// Position currently rendered by the spring.
    pub fn rendered(&self) -> Vec2 {
        self.spring.position
    }
}

pub(super) fn update_magnet_targets(
    sample: Res<PointerSample>,
    mut magnets: Query<(
        &Magnetic,
        &mut MagneticOffset,
        Option<&ComputedNode>,
        Option<&UiGlobalTransform>,
    )>,
) {
    for (magnet, mut offset, node, transform) in &mut magnets {
        match sample.position {
            Some(pointer) => {
                let region = node
                    .zip(transform)
                    .and_then(|(node, transform)| ReferenceRegion::measure(node, transform));
                offset.on_pointer_move(magnet, region, pointer);
            }
            None => offset.on_pointer_leave(),
        }
    }
}

/// Steps each spring and applies the result as a relative layout offset.
pub(super) fn animate_magnets(
    time: Res<Time>,
    mut magnets: Query<(&mut MagneticOffset, &mut Node), With<Magnetic>>,
) {
    let dt = time.delta_secs();
    for (mut offset, mut node) in &mut magnets {
        let target = offset.target;
        if offset.spring.is_settled(target) && offset.spring.position == target {
            continue;
        }
        let position = offset.spring.step(target, dt);
        node.left = Val::Px(position.x);
        node.top = Val::Px(position.y);
    }
}

/// A node that stops being magnetic snaps back to its resting place.
fn release_magnet(remove: On<Remove, Magnetic>, mut nodes: Query<&mut Node>) {
    if let Ok(mut node) = nodes.get_mut(remove.entity) {
        node.left = Val::Px(0.0);
        node.top = Val::Px(0.0);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Magnetic>()
        .register_type::<MagneticOffset>();
    app.add_observer(release_magnet);
}
