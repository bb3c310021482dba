//! Reusable UI widget constructors.

use std::borrow::Cow;

use bevy::ecs::hierarchy::ChildSpawner;
use bevy::ecs::spawn::SpawnWith;
use bevy::ecs::system::IntoObserverSystem;
use bevy::prelude::*;

use super::interaction::HoverFill;
use super::mode::{ThemeMode, ThemeToggleLabel, Themed};
use super::palette;
use crate::proximity::Magnetic;

/// Full-screen scrolling column. Use as root for every screen.
pub fn ui_root(name: impl Into<Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            overflow: Overflow::scroll_y(),
            ..default()
        },
        BackgroundColor(palette::PAPER),
        Themed::Surface,
    )
}

/// Full-width section with generous padding.
pub fn section(name: impl Into<Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::axes(Val::Px(64.0), Val::Px(96.0)),
            row_gap: Val::Px(24.0),
            ..default()
        },
    )
}

/// Large header text.
pub fn header(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
        TextColor(palette::INK),
        Themed::Text,
    )
}

/// Text at an arbitrary size in the foreground color.
pub fn text(text: impl Into<String>, font_size: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(font_size),
        TextColor(palette::INK),
        Themed::Text,
    )
}

/// Small faded caption.
pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_SMALL),
        TextColor(palette::INK.with_alpha(palette::MUTED_ALPHA)),
        Themed::MutedText,
    )
}

/// Thin horizontal rule.
pub fn rule() -> impl Bundle {
    (
        Name::new("Rule"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(1.0),
            ..default()
        },
        BackgroundColor(palette::INK),
        Themed::Fill,
    )
}

/// Outlined button that leans toward a nearby pointer.
pub fn magnetic_button<E, B, M, I>(text: impl Into<String>, action: I) -> impl Bundle
where
    E: EntityEvent,
    B: Bundle,
    I: IntoObserverSystem<E, B, M>,
{
    magnetic_button_with(Text(text.into()), action)
}

/// Magnetic button whose caption names the mode it switches to.
pub fn theme_toggle() -> impl Bundle {
    magnetic_button_with(
        (Text::new(ThemeMode::default().toggle_label()), ThemeToggleLabel),
        |_: On<Pointer<Click>>, mut mode: ResMut<ThemeMode>| {
            *mode = mode.toggled();
        },
    )
}

/// Outer wrapper keeps the layout slot; the inner `Button` carries
/// [`Magnetic`] and moves within it.
fn magnetic_button_with<E, B, M, I>(caption: impl Bundle, action: I) -> impl Bundle
where
    E: EntityEvent,
    B: Bundle,
    I: IntoObserverSystem<E, B, M>,
{
    let action = IntoObserverSystem::into_system(action);
    (
        Name::new("Magnetic Button"),
        Node::default(),
        Children::spawn(SpawnWith(move |parent: &mut ChildSpawner| {
            parent
                .spawn((
                    Name::new("Magnetic Button Inner"),
                    Button,
                    Magnetic::default(),
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(20.0)),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::NONE),
                    BorderColor::all(palette::INK),
                    Themed::Outline,
                    HoverFill,
                    children![(
                        caption,
                        TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                        TextColor(palette::INK),
                        Pickable::IGNORE,
                    )],
                ))
                .observe(action);
        })),
    )
}
