//! Common imports for the entire crate.

pub use bevy::prelude::*;

pub use crate::config::{CliArgs, SiteConfig};
pub use crate::proximity::{
    FirstEntry, InversionZone, Magnetic, MagneticOffset, NoticeDismissed, attach,
};
pub use crate::theme::ThemeMode;
pub use crate::{AppSystems, Screen};
