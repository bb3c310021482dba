//! Zone variant: a containment flag with a one-shot first-entry notice.

use std::time::Duration;

use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};

use super::region::ReferenceRegion;
use super::PointerSample;

/// How long a first-entry notice stays up before it is dismissed.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// Tracks whether the pointer is inside a node's rectangle.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[require(OneShot)]
pub struct InversionZone {
    pub is_inside: bool,
}

/// Latched permanently on the first qualifying event.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct OneShot {
    triggered: bool,
}

impl OneShot {
    pub const fn has_triggered(&self) -> bool {
        self.triggered
    }

    /// Latches. Returns `true` only the first time.
    pub const fn fire(&mut self) -> bool {
        let first = !self.triggered;
        self.triggered = true;
        first
    }
}

/// Result of evaluating one pointer sample against a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneChange {
    Unchanged,
    Entered { first: bool },
    Exited,
}

impl InversionZone {
    /// Evaluates one pointer sample against a freshly measured region.
    ///
    /// A missing region is a no-op.
    pub fn on_pointer_move(
        &mut self,
        latch: &mut OneShot,
        region: Option<ReferenceRegion>,
        pointer: Vec2,
    ) -> ZoneChange {
        let Some(region) = region else {
            return ZoneChange::Unchanged;
        };
        let inside = region.contains(pointer);
        match (self.is_inside, inside) {
            (false, true) => {
                self.is_inside = true;
                ZoneChange::Entered {
                    first: latch.fire(),
                }
            }
            (true, false) => {
                self.is_inside = false;
                ZoneChange::Exited
            }
            _ => ZoneChange::Unchanged,
        }
    }
}

/// Fired the first time the pointer enters a zone.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstEntry {
    pub zone: Entity,
}

/// Fired when a zone's first-entry notice times out.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeDismissed {
    pub zone: Entity,
}

/// Pending dismissal of a first-entry notice. Owned by the zone, so
/// despawning the zone cancels it.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct NoticeTimer(pub Timer);

impl Default for NoticeTimer {
    fn default() -> Self {
        Self(Timer::new(NOTICE_DURATION, TimerMode::Once))
    }
}

pub(super) fn update_zones(
    sample: Res<PointerSample>,
    mut zones: Query<(
        Entity,
        &mut InversionZone,
        &mut OneShot,
        Option<&ComputedNode>,
        Option<&UiGlobalTransform>,
    )>,
    mut commands: Commands,
) {
    let Some(pointer) = sample.position else {
        return;
    };
    for (zone, mut state, mut latch, node, transform) in &mut zones {
        let region = node
            .zip(transform)
            .and_then(|(node, transform)| ReferenceRegion::measure(node, transform));
        // Compare before writing so `Changed<InversionZone>` only fires on a flip.
        let mut next = *state;
        match next.on_pointer_move(&mut latch, region, pointer) {
            ZoneChange::Unchanged => continue,
            ZoneChange::Entered { first: true } => {
                debug!("pointer entered zone {zone} for the first time");
                commands.entity(zone).try_insert(NoticeTimer::default());
                commands.trigger(FirstEntry { zone });
            }
            ZoneChange::Entered { first: false } | ZoneChange::Exited => {}
        }
        *state = next;
    }
}

pub(super) fn tick_notice_timers(
    time: Res<Time>,
    mut timers: Query<(Entity, &mut NoticeTimer)>,
    mut commands: Commands,
) {
    for (zone, mut timer) in &mut timers {
        timer.0.tick(time.delta());
        if timer.0.just_finished() {
            commands.entity(zone).try_remove::<NoticeTimer>();
            commands.trigger(NoticeDismissed { zone });
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<InversionZone>()
        .register_type::<OneShot>()
        .register_type::<NoticeTimer>();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REGION: ReferenceRegion = ReferenceRegion::new(100.0, 100.0, 100.0, 100.0);

    #[test]
    fn one_shot_fires_once() {
        let mut latch = OneShot::default();
        assert!(!latch.has_triggered());
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_triggered());
    }

    #[test]
    fn enter_exit_reenter_fires_first_entry_once() {
        let mut zone = InversionZone::default();
        let mut latch = OneShot::default();

        let change = zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(150.0, 150.0));
        assert_eq!(change, ZoneChange::Entered { first: true });
        assert!(zone.is_inside);

        let change = zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(300.0, 300.0));
        assert_eq!(change, ZoneChange::Exited);
        assert!(!zone.is_inside);

        let change = zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(150.0, 150.0));
        assert_eq!(change, ZoneChange::Entered { first: false });
        assert!(zone.is_inside);
        assert!(latch.has_triggered());
    }

    #[test]
    fn moving_within_zone_is_unchanged() {
        let mut zone = InversionZone::default();
        let mut latch = OneShot::default();
        zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(120.0, 120.0));

        let change = zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(180.0, 180.0));

        assert_eq!(change, ZoneChange::Unchanged);
    }

    #[test]
    fn single_pixel_crossing_flips() {
        let mut zone = InversionZone::default();
        let mut latch = OneShot::default();

        zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(200.0, 150.0));
        assert!(zone.is_inside);

        zone.on_pointer_move(&mut latch, Some(REGION), Vec2::new(201.0, 150.0));
        assert!(!zone.is_inside);
    }

    #[test]
    fn missing_region_is_a_no_op() {
        let mut zone = InversionZone::default();
        let mut latch = OneShot::default();

        let change = zone.on_pointer_move(&mut latch, None, Vec2::new(150.0, 150.0));

        assert_eq!(change, ZoneChange::Unchanged);
        assert!(!zone.is_inside);
        assert!(!latch.has_triggered());
    }
}
