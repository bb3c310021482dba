//! Portfolio site and FLONK landing page rendered as Bevy UI.

pub mod config;
pub mod content;
#[cfg(feature = "dev")]
pub mod dev_tools;
pub mod prelude;
pub mod proximity;
pub mod screens;
#[cfg(test)]
pub mod testing;
pub mod theme;
pub mod ui_camera;
pub mod widgets;

use bevy::prelude::*;

pub use screens::Screen;

/// High-level groupings of systems for the app in the `Update` schedule.
/// Configured to run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AppSystems {
    /// Read window input into resources.
    RecordInput,
    /// Re-evaluate proximity triggers against the latest pointer sample.
    Proximity,
    /// Tick timers and step springs.
    Animate,
    /// Write derived state into UI nodes.
    Ui,
}

/// Orders the `AppSystems` sets.
pub fn configure_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            AppSystems::RecordInput,
            AppSystems::Proximity,
            AppSystems::Animate,
            AppSystems::Ui,
        )
            .chain(),
    );
}

/// Everything except windowing and rendering, so tests can run it on
/// `MinimalPlugins`.
pub fn plugin(app: &mut App) {
    configure_sets(app);

    app.add_plugins((
        config::plugin,
        ui_camera::plugin,
        theme::plugin,
        proximity::plugin,
        widgets::plugin,
        screens::plugin,
    ));
}
