//! FLONK landing page under `/p/flonk`.

use bevy::ecs::spawn::SpawnIter;
use bevy::prelude::*;

use super::Screen;
use crate::content::{flonk, links};
use crate::theme::{Themed, palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Screen::Flonk), spawn_flonk);
}

fn spawn_flonk(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Flonk Screen"),
        DespawnOnExit(Screen::Flonk),
        children![
            top_bar(),
            hero(),
            feature_list("AWESOME FEATURES", flonk::FEATURES),
            feature_list("MORE FEATURES!", flonk::MORE_FEATURES),
            about(),
            legal_footer(),
        ],
    ));
}

fn top_bar() -> impl Bundle {
    (
        Name::new("Top Bar"),
        Node {
            width: Val::Percent(100.0),
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            padding: UiRect::axes(Val::Px(32.0), Val::Px(24.0)),
            border: UiRect::bottom(Val::Px(2.0)),
            ..default()
        },
        BorderColor::all(palette::INK),
        Themed::Outline,
        children![
            widget::text("FRANZ.CX", palette::FONT_SIZE_LABEL),
            widget::magnetic_button("APP STORE", |_: On<Pointer<Click>>| {
                info!(link = links::APP_STORE, "link activated");
            }),
        ],
    )
}

fn hero() -> impl Bundle {
    (
        widget::section("Flonk Hero"),
        children![
            widget::text(flonk::TITLE, palette::FONT_SIZE_DISPLAY),
            widget::text(flonk::TAGLINE, palette::FONT_SIZE_LABEL),
            widget::magnetic_button("DOWNLOAD NOW", |_: On<Pointer<Click>>| {
                info!(link = links::APP_STORE, "link activated");
            }),
            (
                Name::new("Warning Badge"),
                Node {
                    align_self: AlignSelf::Start,
                    padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::all(palette::INK),
                Themed::Outline,
                children![widget::text(flonk::WARNING, palette::FONT_SIZE_SMALL)],
            ),
        ],
    )
}

fn feature_list(title: &'static str, features: &'static [&'static str]) -> impl Bundle {
    (
        widget::section(title),
        Children::spawn((
            Spawn(widget::header(title)),
            SpawnIter(features.iter().map(|feature| {
                (
                    Node {
                        column_gap: Val::Px(16.0),
                        ..default()
                    },
                    children![
                        widget::text("■", palette::FONT_SIZE_BODY),
                        widget::text(*feature, palette::FONT_SIZE_BODY),
                    ],
                )
            })),
        )),
    )
}

fn about() -> impl Bundle {
    (
        widget::section("About"),
        children![
            widget::header(flonk::ABOUT_TITLE),
            widget::text(flonk::ABOUT, palette::FONT_SIZE_LABEL),
        ],
    )
}

fn legal_footer() -> impl Bundle {
    (
        widget::section("Legal"),
        Children::spawn((
            Spawn(widget::rule()),
            Spawn(widget::label("© Franz Benthin. All rights reserved.")),
            Spawn((
                Node {
                    column_gap: Val::Px(24.0),
                    ..default()
                },
                Children::spawn(SpawnIter(
                    flonk::LEGAL_LINKS.iter().map(|link| widget::label(*link)),
                )),
            )),
        )),
    )
}
