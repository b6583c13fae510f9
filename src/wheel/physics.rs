//! Angular fling physics
//!
//! A fling turns a torque estimate into an angular velocity, which then
//! decays under friction one frame at a time:
//! - quadratic friction (velocity squared) bleeds off fast spins quickly
//! - a constant friction floor brings slow spins to exactly zero
//!
//! Velocities are in degrees per millisecond.

use crate::config::PhysicsTuning;

/// Whether the wheel is coasting after a fling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Idle,
    Settling,
}

/// Result of advancing the physics to a new timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Nothing to integrate
    Idle,
    /// Wheel turned by this many degrees and keeps settling
    Moved(f32),
    /// Velocity reached zero this step; no more ticks until the next fling
    Settled,
}

#[derive(Debug, Clone)]
pub struct AngularPhysics {
    tuning: PhysicsTuning,
    angular_velocity: f32,
    last_update_ms: u64,
    requires_update: bool,
}

impl AngularPhysics {
    pub fn new(tuning: PhysicsTuning) -> Self {
        Self {
            tuning,
            angular_velocity: 0.0,
            last_update_ms: 0,
            requires_update: false,
        }
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    pub fn set_tuning(&mut self, tuning: PhysicsTuning) {
        self.tuning = tuning;
        let max = tuning.max_angular_velocity;
        self.angular_velocity = self.angular_velocity.clamp(-max, max);
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    pub fn phase(&self) -> MotionPhase {
        if self.requires_update {
            MotionPhase::Settling
        } else {
            MotionPhase::Idle
        }
    }

    pub fn is_settling(&self) -> bool {
        self.requires_update
    }

    /// Start a fling from a torque estimate
    ///
    /// Treats the wheel as a ring of unit mass: angular acceleration is
    /// `torque / r²`, scaled into a velocity and clamped. Returns the new
    /// angular velocity.
    pub fn fling(&mut self, torque: f32, wheel_radius: f32, now_ms: u64) -> f32 {
        let radius_squared = wheel_radius * wheel_radius;
        let velocity = if radius_squared > 0.0 {
            let angular_accel = torque / radius_squared;
            angular_accel * self.tuning.velocity_gain
        } else {
            0.0
        };

        let max = self.tuning.max_angular_velocity;
        self.angular_velocity = if velocity.is_finite() {
            velocity.clamp(-max, max)
        } else {
            0.0
        };
        self.last_update_ms = now_ms;
        self.requires_update = self.angular_velocity != 0.0;

        log::debug!(
            "Fling: torque={:.3} radius={:.1} velocity={:.4}",
            torque,
            wheel_radius,
            self.angular_velocity
        );
        self.angular_velocity
    }

    /// Cancel any settle in progress
    pub fn stop(&mut self) {
        self.angular_velocity = 0.0;
        self.requires_update = false;
    }

    /// Apply one tick of friction, never pushing the velocity past zero
    pub fn apply_friction(&mut self) {
        let vel = self.angular_velocity;
        let friction = vel * vel * self.tuning.velocity_friction + self.tuning.constant_friction;
        if vel > 0.0 {
            self.angular_velocity = (vel - friction).max(0.0);
        } else if vel < 0.0 {
            self.angular_velocity = (vel + friction).min(0.0);
        }
    }

    /// Integrate one tick of `delta_ms` milliseconds
    pub fn step(&mut self, delta_ms: f32) -> Motion {
        if !self.requires_update {
            return Motion::Idle;
        }

        self.apply_friction();

        if self.angular_velocity == 0.0 {
            self.requires_update = false;
            Motion::Settled
        } else {
            Motion::Moved(self.angular_velocity * delta_ms)
        }
    }

    /// Integrate from the last update up to `now_ms`
    pub fn advance(&mut self, now_ms: u64) -> Motion {
        if !self.requires_update {
            return Motion::Idle;
        }
        let delta = now_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = now_ms;
        self.step(delta as f32)
    }
}

impl Default for AngularPhysics {
    fn default() -> Self {
        Self::new(PhysicsTuning::default())
    }
}
