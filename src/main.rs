//! Portfolio site entry point.

use bevy::log::LogPlugin;
use clap::Parser;
use folio::config::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use folio::prelude::*;

fn main() -> AppExit {
    let args = CliArgs::parse();

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    resolution: DEFAULT_WINDOW_SIZE.into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: args.log_filter.clone(),
                ..default()
            }),
    )
    .insert_resource(SiteConfig::from(&args))
    .add_plugins(folio::plugin);

    #[cfg(feature = "dev")]
    app.add_plugins(folio::dev_tools::plugin);

    app.run()
}
