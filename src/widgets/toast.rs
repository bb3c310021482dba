//! Achievement toast shown while a zone's first-entry notice is up.

use bevy::prelude::*;

use crate::proximity::{FirstEntry, NoticeDismissed};
use crate::theme::palette;

pub const TOAST_TITLE: &str = "ACHIEVEMENT UNLOCKED";
pub const TOAST_BODY: &str = "YOU FOUND THE DARK SIDE";

/// Toast spawned under the zone that earned it.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AchievementToast;

fn toast() -> impl Bundle {
    (
        Name::new("Achievement Toast"),
        AchievementToast,
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(32.0),
            right: Val::Px(32.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::axes(Val::Px(24.0), Val::Px(16.0)),
            row_gap: Val::Px(4.0),
            ..default()
        },
        BackgroundColor(palette::TOAST_BACKGROUND),
        GlobalZIndex(10),
        Pickable::IGNORE,
        children![
            (
                Text::new(TOAST_TITLE),
                TextFont::from_font_size(palette::FONT_SIZE_SMALL),
                TextColor(palette::TOAST_TEXT.with_alpha(palette::MUTED_ALPHA)),
            ),
            (
                Text::new(TOAST_BODY),
                TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                TextColor(palette::TOAST_TEXT),
            ),
        ],
    )
}

fn show_toast(event: On<FirstEntry>, mut commands: Commands) {
    let Ok(mut zone) = commands.get_entity(event.zone) else {
        return;
    };
    info!("achievement unlocked");
    zone.with_child(toast());
}

fn dismiss_toast(
    event: On<NoticeDismissed>,
    toasts: Query<(Entity, &ChildOf), With<AchievementToast>>,
    mut commands: Commands,
) {
    for (toast, parent) in &toasts {
        if parent.parent() == event.zone {
            commands.entity(toast).despawn();
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<AchievementToast>();
    app.add_observer(show_toast).add_observer(dismiss_toast);
}
