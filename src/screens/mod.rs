//! Top-level pages. Exactly one is shown at a time.

mod flonk;
mod maintenance;
mod portfolio;
mod preloader;

use bevy::prelude::*;

use crate::config::SiteConfig;
use crate::content::links;
use crate::theme::widget;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
#[states(scoped_entities)]
pub enum Screen {
    /// Percentage counter shown before the portfolio.
    #[default]
    Preloader,
    Portfolio,
    /// Replaces the home flow while maintenance mode is on.
    Maintenance,
    /// FLONK landing page, reachable under `/p/flonk`.
    Flonk,
}

pub(super) fn plugin(app: &mut App) {
    app.init_state::<Screen>();
    app.register_type::<Screen>();

    app.add_systems(Startup, enter_initial_screen);
    app.add_plugins((
        preloader::plugin,
        portfolio::plugin,
        maintenance::plugin,
        flonk::plugin,
    ));
}

fn enter_initial_screen(config: Res<SiteConfig>, mut next: ResMut<NextState<Screen>>) {
    let screen = config.initial_screen();
    info!(?screen, route = ?config.route, "opening site");
    if screen != Screen::default() {
        next.set(screen);
    }
}

/// GitHub, LinkedIn and mail buttons. There is no browser to hand the
/// links to, so activation is logged.
fn social_buttons() -> impl Bundle {
    (
        Name::new("Social Links"),
        Node {
            column_gap: Val::Px(16.0),
            ..default()
        },
        children![
            widget::magnetic_button("GITHUB", |_: On<Pointer<Click>>| {
                info!(link = links::GITHUB, "link activated");
            }),
            widget::magnetic_button("LINKEDIN", |_: On<Pointer<Click>>| {
                info!(link = links::LINKEDIN, "link activated");
            }),
            widget::magnetic_button("MAIL", |_: On<Pointer<Click>>| {
                info!(link = links::MAIL, "link activated");
            }),
        ],
    )
}
