//! Shared UI theme: light/dark mode, palette, interaction feedback, and
//! reusable widget constructors.

pub mod interaction;
pub mod mode;
pub mod palette;
pub mod widget;

pub use mode::{InvertsTheme, ThemeMode, ThemeToggleLabel, Themed};

pub fn plugin(app: &mut bevy::prelude::App) {
    app.add_plugins((mode::plugin, interaction::plugin));
}
