//! Live wall-clock text.

use std::time::Duration;

use bevy::prelude::*;
use chrono::Timelike;

use crate::AppSystems;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum ClockFormat {
    /// `HH:MM`
    HoursMinutes,
    /// `HH:MM:SS`
    #[default]
    HoursMinutesSeconds,
}

/// Text that shows the local time, refreshed once per second.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct LiveClock {
    pub format: ClockFormat,
    pub prefix: &'static str,
    refresh: Timer,
}

impl LiveClock {
    pub fn new(format: ClockFormat) -> Self {
        Self {
            format,
            prefix: "",
            refresh: Timer::new(Duration::from_secs(1), TimerMode::Repeating),
        }
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn render(&self, time: &impl Timelike) -> String {
        format!("{}{}", self.prefix, format_clock(time, self.format))
    }
}

/// 24-hour, zero-padded.
pub fn format_clock(time: &impl Timelike, format: ClockFormat) -> String {
    match format {
        ClockFormat::HoursMinutes => format!("{:02}:{:02}", time.hour(), time.minute()),
        ClockFormat::HoursMinutesSeconds => format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ),
    }
}

fn update_clocks(time: Res<Time>, mut clocks: Query<(&mut LiveClock, &mut Text)>) {
    let mut now = None;
    for (mut clock, mut text) in &mut clocks {
        clock.refresh.tick(time.delta());
        if !clock.is_added() && !clock.refresh.just_finished() {
            continue;
        }
        let now = *now.get_or_insert_with(|| chrono::Local::now().time());
        text.0 = clock.render(&now);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<LiveClock>();

    app.add_systems(Update, update_clocks.in_set(AppSystems::Ui));
}
