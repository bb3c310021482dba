//! Testing utilities for Bevy systems.

#![cfg(test)]

use std::time::Duration;

use bevy::ecs::query::QueryFilter;
use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::ui::{ComputedNode, UiGlobalTransform};

use crate::proximity::ReferenceRegion;

/// Frame length used by [`create_timed_test_app`].
pub const FRAME: Duration = Duration::from_millis(10);

/// Creates a minimal app for testing with essential plugins and ordered
/// system sets.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    crate::configure_sets(&mut app);
    app
}

/// Creates a test app whose clock advances by exactly [`FRAME`] per update.
pub fn create_timed_test_app() -> App {
    let mut app = create_test_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app
}

/// Helper to advance the app by one frame.
pub fn tick(app: &mut App) {
    app.update();
}

/// Helper to advance the app by multiple frames.
pub fn tick_multiple(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

/// Runs enough [`FRAME`]-long updates to cover `duration`, plus one for the
/// first frame, which may not advance time.
pub fn advance(app: &mut App, duration: Duration) {
    let frames = duration.as_millis().div_ceil(FRAME.as_millis());
    tick_multiple(app, usize::try_from(frames).unwrap_or(usize::MAX) + 1);
}

/// Spawns a UI node whose layout already reports `region`.
pub fn spawn_measured(world: &mut World, region: ReferenceRegion) -> Entity {
    world
        .spawn((
            Node::default(),
            ComputedNode {
                size: Vec2::new(region.width, region.height),
                ..default()
            },
            UiGlobalTransform::from(Affine2::from_translation(region.center())),
        ))
        .id()
}

/// Asserts the number of entities matching `F`.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let count = query.iter(app.world()).count();
    assert_eq!(
        count,
        expected,
        "expected {expected} entities matching {}, found {count}",
        std::any::type_name::<F>()
    );
}

/// Reads the single `Text` on an entity carrying marker `M`.
pub fn single_text<M: Component>(app: &mut App) -> String {
    let mut query = app.world_mut().query_filtered::<&Text, With<M>>();
    query
        .single(app.world())
        .map(|text| text.0.clone())
        .unwrap_or_default()
}
