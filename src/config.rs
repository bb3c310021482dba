//! Command-line and environment configuration.
//!
//! Precedence: CLI flags, then environment (`MAINTENANCE_MODE`), then
//! built-in defaults.

use std::convert::Infallible;

use bevy::prelude::*;
use clap::Parser;

use crate::Screen;

pub const WINDOW_TITLE: &str = "FRANZ.CX";
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1440, 900);
pub const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,folio=info";

/// Command line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "folio",
    version,
    about = "Portfolio site and FLONK landing page"
)]
pub struct CliArgs {
    /// Show the maintenance page instead of the portfolio.
    ///
    /// Project pages under `/p/` are still reachable.
    #[arg(
        long,
        env = "MAINTENANCE_MODE",
        default_value_t = false,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_switch
    )]
    pub maintenance: bool,

    /// Page to open, e.g. `/` or `/p/flonk`.
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Log filter passed to the log plugin.
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

/// Only the exact value `true` enables a switch. Anything else is off
/// rather than a parse error.
fn parse_switch(value: &str) -> Result<bool, Infallible> {
    Ok(value.trim() == "true")
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            maintenance: false,
            route: "/".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Pages reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Route {
    Home,
    Flonk,
    /// A `/p/` path naming no known project.
    UnknownProject,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let Some(project) = path.trim().strip_prefix("/p/") else {
            return Self::Home;
        };
        match project.split('/').next() {
            Some("flonk") => Self::Flonk,
            _ => Self::UnknownProject,
        }
    }

    /// Every `/p/` path is a project page, known or not.
    pub const fn is_project_page(self) -> bool {
        matches!(self, Self::Flonk | Self::UnknownProject)
    }
}

/// Resolved site configuration.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct SiteConfig {
    pub maintenance: bool,
    pub route: Route,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from(&CliArgs::default())
    }
}

impl From<&CliArgs> for SiteConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            maintenance: args.maintenance,
            route: Route::parse(&args.route),
        }
    }
}

impl SiteConfig {
    /// Project pages bypass maintenance mode. An unknown project page
    /// falls back to the portfolio.
    pub const fn initial_screen(&self) -> Screen {
        match self.route {
            Route::Flonk => Screen::Flonk,
            Route::UnknownProject => Screen::Preloader,
            Route::Home if self.maintenance => Screen::Maintenance,
            Route::Home => Screen::Preloader,
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SiteConfig>();
    app.init_resource::<SiteConfig>();
}
