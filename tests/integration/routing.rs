//! Initial screen selection and the preloader hand-off.

use bevy::prelude::*;
use folio::Screen;
use folio::config::{Route, SiteConfig};
use folio::widgets::counter::{PRELOADER_HOLD, PRELOADER_INTERVAL};
use folio::widgets::details::ProjectRow;
use folio::widgets::{ExpandedProject, LinearCounter};
use pretty_assertions::assert_eq;

use crate::{advance, count, create_site_app, home};

fn screen(app: &App) -> Screen {
    *app.world().resource::<State<Screen>>().get()
}

#[test]
fn home_starts_with_preloader() {
    let app = create_site_app(home(false));
    assert_eq!(screen(&app), Screen::Preloader);
}

#[test]
fn maintenance_replaces_home() {
    let mut app = create_site_app(home(true));
    assert_eq!(screen(&app), Screen::Maintenance);
    assert_eq!(count::<With<LinearCounter>>(&mut app), 1);
}

#[test]
fn project_pages_bypass_maintenance() {
    let app = create_site_app(SiteConfig {
        maintenance: true,
        route: Route::parse("/p/flonk"),
    });
    assert_eq!(screen(&app), Screen::Flonk);
}

#[test]
fn unknown_project_bypasses_maintenance() {
    let app = create_site_app(SiteConfig {
        maintenance: true,
        route: Route::parse("/p/nothing-here"),
    });
    assert_eq!(screen(&app), Screen::Preloader);
}

#[test]
fn preloader_hands_off_to_portfolio() {
    let mut app = create_site_app(home(false));

    advance(&mut app, PRELOADER_INTERVAL * 50);
    assert_eq!(screen(&app), Screen::Preloader);

    advance(&mut app, PRELOADER_HOLD);
    app.update();
    assert_eq!(screen(&app), Screen::Portfolio);

    // Preloader entities are gone, portfolio rows are up and collapsed.
    assert_eq!(count::<With<LinearCounter>>(&mut app), 0);
    assert_eq!(count::<With<ProjectRow>>(&mut app), 6);
    assert_eq!(app.world().resource::<ExpandedProject>().0, None);
}
