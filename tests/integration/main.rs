//! Integration tests running the whole site on `MinimalPlugins`.

mod proximity;
mod routing;

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use folio::config::{Route, SiteConfig};

pub const FRAME: Duration = Duration::from_millis(10);

/// Site app with the given configuration, already past its first frames.
pub fn create_site_app(config: SiteConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(config);
    app.add_plugins(folio::plugin);
    app.update();
    app.update();
    app
}

pub fn home(maintenance: bool) -> SiteConfig {
    SiteConfig {
        maintenance,
        route: Route::Home,
    }
}

/// Runs enough frames to cover `duration`.
pub fn advance(app: &mut App, duration: Duration) {
    let frames = duration.as_millis().div_ceil(FRAME.as_millis()) + 1;
    for _ in 0..frames {
        app.update();
    }
}

pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}
