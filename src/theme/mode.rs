//! Light/dark mode and the components that follow it.

use bevy::prelude::*;

use super::palette;
use crate::AppSystems;
use crate::proximity::InversionZone;

/// Site-wide color mode. Light is black ink on white paper.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn foreground(self) -> Color {
        match self {
            Self::Light => palette::INK,
            Self::Dark => palette::PAPER,
        }
    }

    pub const fn background(self) -> Color {
        match self {
            Self::Light => palette::PAPER,
            Self::Dark => palette::INK,
        }
    }

    /// Caption for the toggle: names the mode it switches to.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "DARK",
            Self::Dark => "LIGHT",
        }
    }
}

/// Which color of an entity follows the current [`ThemeMode`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum Themed {
    /// `TextColor` = foreground.
    Text,
    /// `TextColor` = faded foreground.
    MutedText,
    /// `BackgroundColor` = background.
    Surface,
    /// `BackgroundColor` = foreground.
    Fill,
    /// `BackgroundColor` = faint foreground.
    Track,
    /// `BorderColor` = foreground.
    Outline,
}

/// While the pointer is inside this zone the site renders dark.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(InversionZone)]
pub struct InvertsTheme;

/// Marker for the text showing [`ThemeMode::toggle_label`].
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ThemeToggleLabel;

pub(super) fn apply_theme(
    mode: Res<ThemeMode>,
    mut themed: Query<(
        Ref<Themed>,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
        Option<&mut BorderColor>,
    )>,
) {
    let changed = mode.is_changed();
    let mode = *mode;
    for (role, text, background, border) in &mut themed {
        if !changed && !role.is_added() {
            continue;
        }
        match *role {
            Themed::Text => {
                if let Some(mut text) = text {
                    text.0 = mode.foreground();
                }
            }
            Themed::MutedText => {
                if let Some(mut text) = text {
                    text.0 = mode.foreground().with_alpha(palette::MUTED_ALPHA);
                }
            }
            Themed::Surface => {
                if let Some(mut background) = background {
                    background.0 = mode.background();
                }
            }
            Themed::Fill => {
                if let Some(mut background) = background {
                    background.0 = mode.foreground();
                }
            }
            Themed::Track => {
                if let Some(mut background) = background {
                    background.0 = mode.foreground().with_alpha(palette::FAINT_ALPHA);
                }
            }
            Themed::Outline => {
                if let Some(mut border) = border {
                    *border = BorderColor::all(mode.foreground());
                }
            }
        }
    }
}

fn invert_on_zone_flip(
    zones: Query<&InversionZone, (With<InvertsTheme>, Changed<InversionZone>)>,
    mut mode: ResMut<ThemeMode>,
) {
    for zone in &zones {
        let next = if zone.is_inside {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        mode.set_if_neq(next);
    }
}

fn update_toggle_label(mode: Res<ThemeMode>, mut labels: Query<&mut Text, With<ThemeToggleLabel>>) {
    for mut text in &mut labels {
        text.0 = mode.toggle_label().to_string();
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ThemeMode>()
        .register_type::<Themed>()
        .register_type::<InvertsTheme>()
        .register_type::<ThemeToggleLabel>();
    app.init_resource::<ThemeMode>();

    app.add_systems(Update, invert_on_zone_flip.in_set(AppSystems::Animate));
    app.add_systems(
        Update,
        (
            apply_theme,
            update_toggle_label.run_if(resource_changed::<ThemeMode>),
        )
            .in_set(AppSystems::Ui),
    );
}
