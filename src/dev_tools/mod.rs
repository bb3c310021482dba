//! Development tools, only included with the `dev` feature.
//!
//! World inspector and proximity tracing. This module is stripped from
//! release builds.

use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::AppSystems;
use crate::Screen;
use crate::proximity::{FirstEntry, InversionZone, NoticeDismissed};

const TOGGLE_INSPECTOR_KEY: KeyCode = KeyCode::F12;

/// Whether the world inspector window is open.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct InspectorVisible(pub bool);

fn toggle_inspector(keyboard: Res<ButtonInput<KeyCode>>, mut visible: ResMut<InspectorVisible>) {
    if keyboard.just_pressed(TOGGLE_INSPECTOR_KEY) {
        visible.0 = !visible.0;
    }
}

fn log_screen_transitions(mut transitions: MessageReader<StateTransitionEvent<Screen>>) {
    for transition in transitions.read() {
        info!(from = ?transition.exited, to = ?transition.entered, "screen transition");
    }
}

fn log_zone_flips(zones: Query<(Entity, &InversionZone), Changed<InversionZone>>) {
    for (zone, state) in &zones {
        debug!(%zone, inside = state.is_inside, "zone flipped");
    }
}

fn log_first_entry(event: On<FirstEntry>) {
    debug!(zone = %event.zone, "first entry");
}

fn log_notice_dismissed(event: On<NoticeDismissed>) {
    debug!(zone = %event.zone, "notice dismissed");
}

pub fn plugin(app: &mut App) {
    app.register_type::<InspectorVisible>();
    app.init_resource::<InspectorVisible>();

    app.add_plugins((
        EguiPlugin::default(),
        WorldInspectorPlugin::new().run_if(resource_equals(InspectorVisible(true))),
    ));

    app.add_systems(
        Update,
        (toggle_inspector, log_screen_transitions).in_set(AppSystems::RecordInput),
    );
    app.add_systems(Update, log_zone_flips.in_set(AppSystems::Animate));
    app.add_observer(log_first_entry)
        .add_observer(log_notice_dismissed);
}
