//! Linear counters: the preloader percentage and the maintenance progress bar.

use std::time::Duration;

use bevy::prelude::*;

use crate::AppSystems;

/// Preloader: +2 every 30 ms up to 100, then a 500 ms hold.
pub const PRELOADER_STEP: f32 = 2.0;
pub const PRELOADER_LIMIT: f32 = 100.0;
pub const PRELOADER_INTERVAL: Duration = Duration::from_millis(30);
pub const PRELOADER_HOLD: Duration = Duration::from_millis(500);

/// Maintenance progress bar: 0 to 75 % over three seconds in 50 ms steps.
pub const PROGRESS_LIMIT: f32 = 75.0;
pub const PROGRESS_DURATION: Duration = Duration::from_millis(3000);
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(50);

/// Value that climbs by `step` every `interval` and stops at `limit`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct LinearCounter {
    pub value: f32,
    pub step: f32,
    pub limit: f32,
    pub interval: Timer,
}

impl LinearCounter {
    pub fn new(step: f32, limit: f32, interval: Duration) -> Self {
        Self {
            value: 0.0,
            step,
            limit,
            interval: Timer::new(interval, TimerMode::Repeating),
        }
    }

    /// Counter that reaches `limit` after `duration`.
    pub fn over(limit: f32, duration: Duration, interval: Duration) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let steps = (duration.as_nanos() / interval.as_nanos().max(1)).max(1) as f32;
        Self::new(limit / steps, limit, interval)
    }

    pub fn preloader() -> Self {
        Self::new(PRELOADER_STEP, PRELOADER_LIMIT, PRELOADER_INTERVAL)
    }

    pub fn progress_bar() -> Self {
        Self::over(PROGRESS_LIMIT, PROGRESS_DURATION, PROGRESS_INTERVAL)
    }

    /// Applies `steps` increments, clamped at the limit.
    pub fn advance(&mut self, steps: u32) {
        #[allow(clippy::cast_precision_loss)]
        let increment = self.step * steps as f32;
        self.value = (self.value + increment).min(self.limit);
    }

    pub fn is_complete(&self) -> bool {
        self.value >= self.limit
    }

    /// Rounded percentage caption, e.g. `"42%"`.
    pub fn caption(&self) -> String {
        format!("{:.0}%", self.value.round())
    }
}

/// Waits this long after the counter completes, then fires
/// [`CounterFinished`].
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct HoldAfterComplete(pub Timer);

impl HoldAfterComplete {
    pub fn new(duration: Duration) -> Self {
        Self(Timer::new(duration, TimerMode::Once))
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFinished {
    pub counter: Entity,
}

/// Node that displays a counter it does not own.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum CounterReadout {
    /// `Text` shows the caption.
    Caption(Entity),
    /// `Node` width is the value in percent.
    Fill(Entity),
}

fn tick_counters(time: Res<Time>, mut counters: Query<&mut LinearCounter>) {
    for mut counter in &mut counters {
        if counter.is_complete() {
            continue;
        }
        counter.interval.tick(time.delta());
        let steps = counter.interval.times_finished_this_tick();
        if steps > 0 {
            counter.advance(steps);
        }
    }
}

fn tick_holds(
    time: Res<Time>,
    mut holds: Query<(Entity, &LinearCounter, &mut HoldAfterComplete)>,
    mut commands: Commands,
) {
    for (entity, counter, mut hold) in &mut holds {
        if !counter.is_complete() {
            continue;
        }
        hold.0.tick(time.delta());
        if hold.0.just_finished() {
            commands.trigger(CounterFinished { counter: entity });
        }
    }
}

fn update_readouts(
    counters: Query<&LinearCounter>,
    mut readouts: Query<(&CounterReadout, Option<&mut Text>, Option<&mut Node>)>,
) {
    for (readout, text, node) in &mut readouts {
        match *readout {
            CounterReadout::Caption(source) => {
                let (Ok(counter), Some(mut text)) = (counters.get(source), text) else {
                    continue;
                };
                let caption = counter.caption();
                if text.0 != caption {
                    text.0 = caption;
                }
            }
            CounterReadout::Fill(source) => {
                let (Ok(counter), Some(mut node)) = (counters.get(source), node) else {
                    continue;
                };
                let width = Val::Percent(counter.value);
                if node.width != width {
                    node.width = width;
                }
            }
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<LinearCounter>()
        .register_type::<HoldAfterComplete>()
        .register_type::<CounterReadout>();

    app.add_systems(
        Update,
        (tick_counters, tick_holds).chain().in_set(AppSystems::Animate),
    );
    app.add_systems(Update, update_readouts.in_set(AppSystems::Ui));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FRAME, advance, create_timed_test_app, tick};
    use pretty_assertions::assert_eq;

    #[derive(Resource, Default)]
    struct Finished(u32);

    fn create_counter_test_app() -> App {
        let mut app = create_timed_test_app();
        app.add_plugins(plugin);
        app.init_resource::<Finished>();
        app.add_observer(|_: On<CounterFinished>, mut finished: ResMut<Finished>| {
            finished.0 += 1;
        });
        app
    }

    #[test]
    fn advance_clamps_at_limit() {
        let mut counter = LinearCounter::preloader();
        counter.advance(49);
        assert_eq!(counter.value, 98.0);
        assert!(!counter.is_complete());

        counter.advance(3);
        assert_eq!(counter.value, 100.0);
        assert!(counter.is_complete());
    }

    #[test]
    fn progress_bar_steps_by_one_and_a_quarter() {
        let mut counter = LinearCounter::progress_bar();
        assert_eq!(counter.step, 1.25);

        counter.advance(60);
        assert_eq!(counter.value, PROGRESS_LIMIT);
        counter.advance(10);
        assert_eq!(counter.value, PROGRESS_LIMIT);
    }

    #[test]
    fn caption_rounds() {
        let mut counter = LinearCounter::progress_bar();
        counter.advance(3);
        assert_eq!(counter.caption(), "4%");
        counter.advance(60);
        assert_eq!(counter.caption(), "75%");
    }

    #[test]
    fn preloader_completes_then_holds_before_finishing() {
        let mut app = create_counter_test_app();
        let counter = app
            .world_mut()
            .spawn((
                LinearCounter::preloader(),
                HoldAfterComplete::new(PRELOADER_HOLD),
            ))
            .id();

        // 50 steps of 30 ms.
        advance(&mut app, PRELOADER_INTERVAL * 50);
        let value = app.world().get::<LinearCounter>(counter).map(|c| c.value);
        assert_eq!(value, Some(100.0));
        assert_eq!(app.world().resource::<Finished>().0, 0);

        advance(&mut app, PRELOADER_HOLD);
        assert_eq!(app.world().resource::<Finished>().0, 1);

        advance(&mut app, PRELOADER_HOLD);
        assert_eq!(app.world().resource::<Finished>().0, 1);
    }

    #[test]
    fn readouts_follow_counter() {
        let mut app = create_counter_test_app();
        let counter = app.world_mut().spawn(LinearCounter::progress_bar()).id();
        let caption = app
            .world_mut()
            .spawn((Text::new(""), CounterReadout::Caption(counter)))
            .id();
        let fill = app
            .world_mut()
            .spawn((Node::default(), CounterReadout::Fill(counter)))
            .id();

        advance(&mut app, PROGRESS_DURATION + FRAME * 10);
        tick(&mut app);

        assert_eq!(app.world().get::<Text>(caption).map(|t| t.0.as_str()), Some("75%"));
        assert_eq!(
            app.world().get::<Node>(fill).map(|n| n.width),
            Some(Val::Percent(PROGRESS_LIMIT))
        );
    }
}
