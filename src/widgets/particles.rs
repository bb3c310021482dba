//! Ambient dots drifting up and down behind the maintenance page.

use std::f32::consts::TAU;

use bevy::ecs::spawn::SpawnIter;
use bevy::prelude::*;
use bevy::time::Stopwatch;
use rand::Rng;

use crate::AppSystems;
use crate::theme::ThemeMode;

pub const PARTICLE_COUNT: usize = 15;
/// Peak upward travel in pixels.
pub const BOB_HEIGHT: f32 = 30.0;
const MIN_ALPHA: f32 = 0.1;
const MAX_ALPHA: f32 = 0.3;

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FloatingParticle {
    /// Seconds per up-and-down cycle.
    pub period: f32,
    /// Seconds after spawning before the first cycle starts.
    pub delay: f32,
    /// Time since this particle spawned.
    pub age: Stopwatch,
}

impl FloatingParticle {
    pub fn new(period: f32, delay: f32) -> Self {
        Self {
            period,
            delay,
            age: Stopwatch::new(),
        }
    }

    /// Normalized cycle position in `0..=1`, where `1` is the top.
    pub fn lift(&self, elapsed: f32) -> f32 {
        let t = (elapsed - self.delay).max(0.0) / self.period;
        (1.0 - (t * TAU).cos()) * 0.5
    }
}

/// One randomly placed particle.
pub fn particle<R: Rng>(rng: &mut R) -> impl Bundle + use<R> {
    let size = rng.random_range(2.0..8.0);
    (
        Name::new("Particle"),
        FloatingParticle::new(rng.random_range(10.0..30.0), rng.random_range(0.0..5.0)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(rng.random_range(0.0..100.0)),
            top: Val::Percent(rng.random_range(0.0..100.0)),
            width: Val::Px(size),
            height: Val::Px(size),
            ..default()
        },
        BackgroundColor(Color::NONE),
        Pickable::IGNORE,
    )
}

/// Full-screen layer holding [`PARTICLE_COUNT`] particles.
pub fn particle_field() -> impl Bundle {
    let mut rng = rand::rng();
    let particles: Vec<_> = (0..PARTICLE_COUNT).map(|_| particle(&mut rng)).collect();
    (
        Name::new("Particle Field"),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        Pickable::IGNORE,
        Children::spawn(SpawnIter(particles.into_iter())),
    )
}

fn animate_particles(
    time: Res<Time>,
    mode: Res<ThemeMode>,
    mut particles: Query<(&mut FloatingParticle, &mut Node, &mut BackgroundColor)>,
) {
    let ink = mode.foreground();
    for (mut particle, mut node, mut color) in &mut particles {
        particle.age.tick(time.delta());
        let lift = particle.lift(particle.age.elapsed_secs());
        node.margin.top = Val::Px(-BOB_HEIGHT * lift);
        color.0 = ink.with_alpha(MIN_ALPHA + (MAX_ALPHA - MIN_ALPHA) * lift);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<FloatingParticle>();
    app.add_systems(Update, animate_particles.in_set(AppSystems::Animate));
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{
        advance, assert_entity_count, create_test_app, create_timed_test_app, tick,
    };

    #[test]
    fn lift_waits_for_delay_then_cycles() {
        let particle = FloatingParticle::new(10.0, 2.0);
        assert!(particle.lift(1.0).abs() < 1e-6);
        assert!(particle.lift(2.0).abs() < 1e-6);
        assert!((particle.lift(7.0) - 1.0).abs() < 1e-5);
        assert!(particle.lift(12.0).abs() < 1e-5);
    }

    #[test]
    fn particles_are_randomized_within_bounds() {
        let mut app = create_test_app();
        app.world_mut().spawn(particle_field());
        tick(&mut app);

        assert_entity_count::<With<FloatingParticle>>(&mut app, PARTICLE_COUNT);
        let mut query = app.world_mut().query::<(&FloatingParticle, &Node)>();
        for (particle, node) in query.iter(app.world()) {
            assert!((10.0..30.0).contains(&particle.period));
            assert!((0.0..5.0).contains(&particle.delay));
            let Val::Px(size) = node.width else {
                panic!("particle width should be in pixels");
            };
            assert!((2.0..8.0).contains(&size));
        }
    }

    #[test]
    fn particles_follow_theme_foreground() {
        let mut app = create_test_app();
        app.init_resource::<ThemeMode>();
        app.add_plugins(plugin);
        let dot = app
            .world_mut()
            .spawn((
                FloatingParticle::new(10.0, 0.0),
                Node::default(),
                BackgroundColor(Color::NONE),
            ))
            .id();
        *app.world_mut().resource_mut::<ThemeMode>() = ThemeMode::Dark;
        tick(&mut app);

        let color = app.world().get::<BackgroundColor>(dot).map(|c| c.0.to_srgba());
        let expected = ThemeMode::Dark.foreground().to_srgba();
        assert!(color.is_some_and(|c| c.red == expected.red && c.alpha >= MIN_ALPHA));
    }

    #[test]
    fn delay_counts_from_spawn_not_startup() {
        let mut app = create_timed_test_app();
        app.init_resource::<ThemeMode>();
        app.add_plugins(plugin);
        advance(&mut app, Duration::from_secs(10));

        let dot = app
            .world_mut()
            .spawn((
                FloatingParticle::new(10.0, 2.0),
                Node::default(),
                BackgroundColor(Color::NONE),
            ))
            .id();
        advance(&mut app, Duration::from_secs(1));

        let margin = app.world().get::<Node>(dot).map(|node| node.margin.top);
        assert_eq!(margin, Some(Val::Px(0.0)));

        advance(&mut app, Duration::from_secs(6));
        let margin = app.world().get::<Node>(dot).map(|node| node.margin.top);
        assert!(matches!(margin, Some(Val::Px(top)) if top < -BOB_HEIGHT * 0.5));
    }
}
