//! Pointer-driven behavior on live screens.

use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};
use bevy::window::CursorMoved;
use folio::proximity::{InversionZone, NOTICE_DURATION, OneShot};
use folio::theme::{InvertsTheme, ThemeMode};
use folio::widgets::toast::AchievementToast;
use pretty_assertions::assert_eq;

use crate::{advance, count, create_site_app, home};

/// Gives the maintenance headline zone a 100x100 layout at (100, 100).
fn lay_out_zone(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<InvertsTheme>>();
    let zone = query
        .single(app.world())
        .expect("maintenance page has one inverting zone");
    app.world_mut().entity_mut(zone).insert((
        ComputedNode {
            size: Vec2::splat(100.0),
            ..default()
        },
        UiGlobalTransform::from(Affine2::from_translation(Vec2::splat(150.0))),
    ));
    zone
}

fn move_cursor(app: &mut App, x: f32, y: f32) {
    let window = app.world_mut().spawn_empty().id();
    app.world_mut().write_message(CursorMoved {
        window,
        position: Vec2::new(x, y),
        delta: None,
    });
    app.update();
}

fn mode(app: &App) -> ThemeMode {
    *app.world().resource::<ThemeMode>()
}

#[test]
fn hovering_headline_inverts_theme_and_unlocks_once() {
    let mut app = create_site_app(home(true));
    let zone = lay_out_zone(&mut app);

    move_cursor(&mut app, 150.0, 150.0);
    assert_eq!(mode(&app), ThemeMode::Dark);
    assert_eq!(count::<With<AchievementToast>>(&mut app), 1);

    move_cursor(&mut app, 300.0, 300.0);
    assert_eq!(mode(&app), ThemeMode::Light);
    assert_eq!(
        app.world().get::<InversionZone>(zone).map(|z| z.is_inside),
        Some(false)
    );

    move_cursor(&mut app, 150.0, 150.0);
    assert_eq!(mode(&app), ThemeMode::Dark);
    assert_eq!(count::<With<AchievementToast>>(&mut app), 1);
    assert_eq!(
        app.world().get::<OneShot>(zone).map(OneShot::has_triggered),
        Some(true)
    );

    advance(&mut app, NOTICE_DURATION);
    assert_eq!(count::<With<AchievementToast>>(&mut app), 0);
}

#[test]
fn zone_edges_count_as_inside() {
    let mut app = create_site_app(home(true));
    lay_out_zone(&mut app);

    move_cursor(&mut app, 200.0, 200.0);
    assert_eq!(mode(&app), ThemeMode::Dark);

    move_cursor(&mut app, 200.5, 200.0);
    assert_eq!(mode(&app), ThemeMode::Light);
}
