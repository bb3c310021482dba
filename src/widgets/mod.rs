//! Self-contained animated pieces shared by the screens.

pub mod clock;
pub mod counter;
pub mod details;
pub mod particles;
pub mod toast;

use bevy::prelude::*;

pub use clock::{ClockFormat, LiveClock};
pub use counter::{CounterFinished, CounterReadout, HoldAfterComplete, LinearCounter};
pub use details::ExpandedProject;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        clock::plugin,
        counter::plugin,
        details::plugin,
        particles::plugin,
        toast::plugin,
    ));
}
