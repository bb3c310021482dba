//! The UI camera renders every screen. It persists across all states and
//! clears to the current theme's background.

use bevy::prelude::*;

use crate::AppSystems;
use crate::theme::ThemeMode;

pub fn plugin(app: &mut App) {
    app.register_type::<UiCamera>();
    app.add_systems(Startup, spawn_ui_camera);
    app.add_systems(
        Update,
        follow_theme
            .in_set(AppSystems::Ui)
            .run_if(resource_changed::<ThemeMode>),
    );
}

/// Marker for the global UI camera. Persists across all states.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct UiCamera;

fn spawn_ui_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("UI Camera"),
        UiCamera,
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(ThemeMode::default().background()),
            ..default()
        },
        IsDefaultUiCamera,
    ));
}

fn follow_theme(mode: Res<ThemeMode>, mut cameras: Query<&mut Camera, With<UiCamera>>) {
    for mut camera in &mut cameras {
        camera.clear_color = ClearColorConfig::Custom(mode.background());
    }
}
