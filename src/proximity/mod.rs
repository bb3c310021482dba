//! Proximity triggers: UI state derived from where the pointer is relative
//! to a node.
//!
//! Every cursor move updates [`PointerSample`]. Each attached trigger then
//! re-measures its node's layout rectangle and derives its state:
//! - [`Magnetic`] nodes lean toward a pointer within their capture radius,
//!   smoothed by a [`Spring`](spring::Spring).
//! - [`InversionZone`] nodes track containment and fire [`FirstEntry`] once
//!   per lifetime, followed by [`NoticeDismissed`] after [`NOTICE_DURATION`].
//!
//! Triggers are plain components. [`attach`] inserts them and the returned
//! [`Subscription`] removes them again; despawning the node tears everything
//! down with it.

pub mod magnetic;
pub mod region;
pub mod spring;
pub mod zone;

use std::marker::PhantomData;

use bevy::ecs::system::entity_command;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved};

use crate::AppSystems;

pub use magnetic::{Magnetic, MagneticOffset};
pub use region::ReferenceRegion;
pub use zone::{FirstEntry, InversionZone, NOTICE_DURATION, NoticeDismissed, NoticeTimer, OneShot};

/// Latest pointer position in logical window pixels. `None` while the
/// cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PointerSample {
    pub position: Option<Vec2>,
}

/// Keeps only the newest cursor message of the frame.
fn record_pointer(
    mut moved: MessageReader<CursorMoved>,
    mut left: MessageReader<CursorLeft>,
    mut sample: ResMut<PointerSample>,
) {
    let latest = moved.read().last().map(|message| message.position);
    let has_left = left.read().count() > 0;

    if let Some(position) = latest {
        sample.position = Some(position);
    } else if has_left && sample.position.is_some() {
        sample.position = None;
    }
}

/// Handle to trigger components attached to a node.
///
/// Detaching is idempotent and safe after the node is gone.
#[derive(Debug)]
pub struct Subscription<B: Bundle> {
    element: Entity,
    attached: bool,
    _trigger: PhantomData<fn() -> B>,
}

impl<B: Bundle> Subscription<B> {
    pub const fn element(&self) -> Entity {
        self.element
    }

    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Removes the trigger together with the state it requires, so a
    /// detached node stops reacting to the pointer.
    pub fn detach(&mut self, commands: &mut Commands) {
        if !std::mem::take(&mut self.attached) {
            return;
        }
        if let Ok(mut entity) = commands.get_entity(self.element) {
            entity.queue_silenced(entity_command::remove_with_requires::<B>());
        }
    }
}

/// Attaches `trigger` to `element`. Returns `None` without side effects when
/// the element does not exist.
pub fn attach<B: Bundle>(
    commands: &mut Commands,
    element: Entity,
    trigger: B,
) -> Option<Subscription<B>> {
    let mut entity = commands.get_entity(element).ok()?;
    entity.try_insert(trigger);
    Some(Subscription {
        element,
        attached: true,
        _trigger: PhantomData,
    })
}

pub(super) fn plugin(app: &mut App) {
    app.add_message::<CursorMoved>()
        .add_message::<CursorLeft>()
        .init_resource::<PointerSample>()
        .register_type::<PointerSample>();

    app.add_plugins((magnetic::plugin, zone::plugin));

    app.add_systems(Update, record_pointer.in_set(AppSystems::RecordInput));
    app.add_systems(
        Update,
        (magnetic::update_magnet_targets, zone::update_zones)
            .in_set(AppSystems::Proximity)
            .run_if(resource_changed::<PointerSample>),
    );
    app.add_systems(
        Update,
        (magnetic::animate_magnets, zone::tick_notice_timers).in_set(AppSystems::Animate),
    );
}
