//! Damped spring used to smooth the rendered magnetic offset.

use bevy::prelude::*;

/// Default stiffness (k).
pub const SPRING_STIFFNESS: f32 = 150.0;

/// Default damping (c). Below critical damping for k = 150, so the offset
/// overshoots slightly before settling.
pub const SPRING_DAMPING: f32 = 15.0;

/// Default mass (m).
pub const SPRING_MASS: f32 = 1.0;

/// Largest integration step. Larger frame deltas are split into sub-steps;
/// a single 250 ms step at k = 150 would diverge.
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Positions below this distance from the target with negligible velocity
/// snap to the target.
const REST_EPSILON: f32 = 0.01;

/// Mass-spring-damper acting independently on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Spring {
    pub position: Vec2,
    pub velocity: Vec2,
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING, SPRING_MASS)
    }
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            stiffness: stiffness.max(0.0001),
            damping: damping.max(0.0),
            mass: mass.max(0.0001),
        }
    }

    /// Advances toward `target` by `dt` seconds and returns the new position.
    pub fn step(&mut self, target: Vec2, dt: f32) -> Vec2 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let acceleration =
                (self.stiffness * (target - self.position) - self.damping * self.velocity) / self.mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled(target) {
            self.position = target;
            self.velocity = Vec2::ZERO;
        }
        self.position
    }

    pub fn is_settled(&self, target: Vec2) -> bool {
        self.position.distance(target) < REST_EPSILON && self.velocity.length() < REST_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(spring: &mut Spring, target: Vec2, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(target, 1.0 / 60.0);
        }
    }

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::default();
        let target = Vec2::new(15.0, -6.0);

        run(&mut spring, target, 3.0);

        assert_eq!(spring.position, target);
        assert_eq!(spring.velocity, Vec2::ZERO);
    }

    #[test]
    fn returns_to_rest_at_origin() {
        let mut spring = Spring::default();
        run(&mut spring, Vec2::new(30.0, 30.0), 1.0);

        run(&mut spring, Vec2::ZERO, 3.0);

        assert_eq!(spring.position, Vec2::ZERO);
    }

    #[test]
    fn axes_are_independent() {
        let mut spring = Spring::default();
        run(&mut spring, Vec2::new(20.0, 0.0), 0.5);
        assert_eq!(spring.position.y, 0.0);
        assert!(spring.position.x > 0.0);
    }

    #[test]
    fn long_frame_stays_stable() {
        let mut spring = Spring::default();
        let target = Vec2::new(10.0, 10.0);

        for _ in 0..20 {
            spring.step(target, 0.25);
        }

        assert!(spring.position.is_finite());
        assert!(spring.position.distance(target) < 0.5);
    }

    #[test]
    fn underdamped_defaults_overshoot() {
        let mut spring = Spring::default();
        let mut peak = 0.0_f32;
        for _ in 0..120 {
            peak = peak.max(spring.step(Vec2::X * 10.0, 1.0 / 60.0).x);
        }
        assert!(peak > 10.0, "peak {peak} should overshoot the target");
    }
}
