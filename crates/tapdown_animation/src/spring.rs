//! Spring physics
//!
//! RK4-integrated damped springs. The integrator works in whatever unit the
//! caller animates; settle thresholds are tuned for normalized values (a
//! progress scalar in [0, 1]), which is what the widget layer drives.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Soft spring with a visible overshoot, the disclosure-list default
    pub fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 14.0,
            mass: 1.0,
        }
    }

    /// Tight spring with minimal overshoot (good for small controls)
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// Very fast spring, settles almost immediately
    pub fn snappy() -> Self {
        Self {
            stiffness: 600.0,
            damping: 40.0,
            mass: 1.0,
        }
    }

    /// Damping at which this spring stops oscillating fastest
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Will this spring oscillate past its target?
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

/// A damped spring chasing a target value
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget mid-flight; position and velocity carry over
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Within epsilon of the target with near-zero velocity
    ///
    /// Thresholds assume normalized units: 0.1% of the [0, 1] range,
    /// velocity under 1%/s.
    pub fn is_settled(&self) -> bool {
        const EPSILON: f32 = 1e-3;
        const VELOCITY_EPSILON: f32 = 1e-2;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Advance the simulation by `dt` seconds using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (x, v) = (self.value, self.velocity);

        let a1 = self.acceleration(x, v);
        let (k1_x, k1_v) = (v, a1);

        let a2 = self.acceleration(x + k1_x * dt * 0.5, v + k1_v * dt * 0.5);
        let (k2_x, k2_v) = (v + k1_v * dt * 0.5, a2);

        let a3 = self.acceleration(x + k2_x * dt * 0.5, v + k2_v * dt * 0.5);
        let (k3_x, k3_v) = (v + k2_v * dt * 0.5, a3);

        let a4 = self.acceleration(x + k3_x * dt, v + k3_v * dt);
        let (k4_x, k4_v) = (v + k3_v * dt, a4);

        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);

        // Two seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_retarget_preserves_velocity() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(1.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_preset_damping_classes() {
        // Underdamped presets give the natural overshoot feel
        assert!(SpringConfig::gentle().is_underdamped());
        assert!(SpringConfig::stiff().is_underdamped());
        assert!(!SpringConfig::new(100.0, 40.0, 1.0).is_underdamped());
    }

    #[test]
    fn test_rk4_stable_at_coarse_steps() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);

        // A step size that would blow up a naive Euler integrator
        for _ in 0..100 {
            spring.step(0.05);
            assert!(spring.value() > -1.0);
            assert!(spring.value() < 2.0);
        }
        assert!(spring.value().is_finite());
    }

    #[test]
    fn test_heavier_mass_still_settles() {
        let config = SpringConfig::new(400.0, 25.0, 2.0);
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);

        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
    }
}
