//! "Crafting something special" page shown while maintenance mode is on.
//!
//! The headline block is an inversion zone: hovering it renders the page
//! dark, and the first visit unlocks an achievement toast.

use bevy::prelude::*;

use super::{Screen, social_buttons};
use crate::content;
use crate::theme::{InvertsTheme, ThemeMode, Themed, palette, widget};
use crate::widgets::particles::particle_field;
use crate::widgets::{ClockFormat, CounterReadout, LinearCounter, LiveClock};

pub const CLOCK_PREFIX: &str = "BERLIN · ";
const PROGRESS_WIDTH: f32 = 672.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Maintenance), spawn_maintenance);
    app.add_systems(OnExit(Screen::Maintenance), restore_light_mode);
}

fn spawn_maintenance(mut commands: Commands) {
    let progress = commands
        .spawn((
            Name::new("Launch Progress"),
            LinearCounter::progress_bar(),
            DespawnOnExit(Screen::Maintenance),
        ))
        .id();

    commands.spawn((
        widget::ui_root("Maintenance Screen"),
        DespawnOnExit(Screen::Maintenance),
        children![
            particle_field(),
            (
                Name::new("Maintenance Content"),
                Node {
                    width: Val::Percent(100.0),
                    min_height: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    row_gap: Val::Px(48.0),
                    padding: UiRect::all(Val::Px(64.0)),
                    ..default()
                },
                children![
                    (
                        widget::label(""),
                        LiveClock::new(ClockFormat::HoursMinutesSeconds).with_prefix(CLOCK_PREFIX),
                    ),
                    headline(),
                    progress_bar(progress),
                    social_buttons(),
                ],
            ),
            (
                widget::label(content::MAINTENANCE_LAUNCH),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(32.0),
                    align_self: AlignSelf::Center,
                    ..default()
                },
            ),
        ],
    ));
}

fn headline() -> impl Bundle {
    (
        Name::new("Headline Zone"),
        InvertsTheme,
        Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(24.0),
            padding: UiRect::all(Val::Px(32.0)),
            ..default()
        },
        children![
            widget::text(content::MAINTENANCE_HEADLINE, palette::FONT_SIZE_TITLE),
            widget::text(content::MAINTENANCE_PITCH, palette::FONT_SIZE_SUBHEADER),
            widget::label(content::MAINTENANCE_ASIDE),
        ],
    )
}

fn progress_bar(counter: Entity) -> impl Bundle {
    (
        Name::new("Progress Bar"),
        Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(PROGRESS_WIDTH),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        },
        children![
            (
                Name::new("Progress Track"),
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(1.0),
                    ..default()
                },
                BackgroundColor(palette::INK.with_alpha(palette::FAINT_ALPHA)),
                Themed::Track,
                children![(
                    Name::new("Progress Fill"),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(0.0),
                        width: Val::Percent(0.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(palette::INK),
                    Themed::Fill,
                    CounterReadout::Fill(counter),
                )],
            ),
            (
                Node {
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                },
                children![
                    widget::label("LOADING"),
                    (widget::label("0%"), CounterReadout::Caption(counter)),
                ],
            ),
        ],
    )
}

/// The zone may still hold the page dark when the screen goes away.
fn restore_light_mode(mut mode: ResMut<ThemeMode>) {
    mode.set_if_neq(ThemeMode::Light);
}
