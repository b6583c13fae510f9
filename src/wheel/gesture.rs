//! Single-pointer drag tracking
//!
//! Idle → Dragging → Idle. While dragging, each move rotates the wheel by
//! the change in touch angle, damped by how close the pointer is to the hub.
//! Releasing converts recent pointer velocity into a fling torque.

use glam::Vec2;

use crate::consts::*;
use crate::cross;
use crate::geometry::Circle;
use crate::shortest_angle;

/// Radial drag damping, indexed by `distance² / radius²` in 20 buckets
///
/// Squared so the effect is linear in distance once combined with the
/// squared lookup. The hub bucket is 0, the rim bucket is just under 0.8.
pub const TOUCH_FACTORS: [f32; TOUCH_FACTOR_SIZE] = touch_factors();

const fn touch_factors() -> [f32; TOUCH_FACTOR_SIZE] {
    let mut factors = [0.0; TOUCH_FACTOR_SIZE];
    let size = TOUCH_FACTOR_SIZE as f32;
    let numerator = size * size;
    let mut i = 0;
    while i < TOUCH_FACTOR_SIZE {
        let factor = (TOUCH_FACTOR_SIZE - i) as f32;
        factors[i] = (1.0 - factor * factor / numerator) * TOUCH_DRAG_COEFFICIENT;
        i += 1;
    }
    factors
}

/// Drag damping for a touch at `relative_distance_squared` (0 hub, 1 rim)
pub fn touch_factor(relative_distance_squared: f32) -> f32 {
    let index = (relative_distance_squared * TOUCH_FACTOR_SIZE as f32) as usize;
    TOUCH_FACTORS[index.min(TOUCH_FACTOR_SIZE - 1)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    /// Pointer position (pixels, y-down, same space as the layout)
    pub position: Vec2,
    /// Host timestamp in milliseconds
    pub time_ms: u64,
}

impl TouchEvent {
    pub fn new(action: TouchAction, position: Vec2, time_ms: u64) -> Self {
        Self {
            action,
            position,
            time_ms,
        }
    }

    pub fn down(position: Vec2, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, position, time_ms)
    }

    pub fn moved(position: Vec2, time_ms: u64) -> Self {
        Self::new(TouchAction::Move, position, time_ms)
    }

    pub fn up(position: Vec2, time_ms: u64) -> Self {
        Self::new(TouchAction::Up, position, time_ms)
    }

    pub fn cancel(position: Vec2, time_ms: u64) -> Self {
        Self::new(TouchAction::Cancel, position, time_ms)
    }
}

/// Ring buffer size for velocity samples
const HISTORY_SIZE: usize = 20;

/// Only samples this recent count toward the velocity
const HORIZON_MS: u64 = 100;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time_ms: u64,
    position: Vec2,
}

/// Pointer velocity estimate over the most recent samples
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn clear(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    pub fn add(&mut self, time_ms: u64, position: Vec2) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in pixels per millisecond
    ///
    /// Compares the newest sample with the oldest one inside the horizon.
    /// Zero with fewer than two samples or no elapsed time.
    pub fn velocity(&self) -> Vec2 {
        let Some(newest) = self.samples[self.index] else {
            return Vec2::ZERO;
        };

        let mut oldest = newest;
        let mut current = self.index;
        for _ in 1..HISTORY_SIZE {
            current = (current + HISTORY_SIZE - 1) % HISTORY_SIZE;
            let Some(sample) = self.samples[current] else {
                break;
            };
            // Out-of-order timestamps end the window too
            if sample.time_ms > oldest.time_ms || newest.time_ms - sample.time_ms > HORIZON_MS {
                break;
            }
            oldest = sample;
        }

        let elapsed = newest.time_ms - oldest.time_ms;
        if elapsed == 0 {
            return Vec2::ZERO;
        }
        (newest.position - oldest.position) / elapsed as f32
    }
}

/// Drag state for a single pointer
#[derive(Debug, Clone, Default)]
pub struct TouchController {
    dragging: bool,
    last_touch_angle: f32,
    dragged_angle: f32,
    last_position: Vec2,
    tracker: VelocityTracker,
}

impl TouchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Total absolute angle (degrees) the wheel moved during this drag
    pub fn dragged_angle(&self) -> f32 {
        self.dragged_angle
    }

    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    /// Enter Dragging at `position`
    pub fn begin_drag(&mut self, wheel: &Circle, position: Vec2, time_ms: u64) {
        self.dragging = true;
        self.dragged_angle = 0.0;
        self.tracker.clear();
        self.tracker.add(time_ms, position);
        self.last_position = position;
        self.last_touch_angle = wheel.angle_to_degrees(position);
    }

    /// Process a move while dragging, returning the wheel angle delta
    pub fn drag(&mut self, wheel: &Circle, position: Vec2, time_ms: u64) -> f32 {
        self.tracker.add(time_ms, position);
        self.last_position = position;

        let factor = touch_factor(wheel.relative_distance_squared(position));
        let touch_angle = wheel.angle_to_degrees(position);
        let delta = -shortest_angle(touch_angle, self.last_touch_angle) * factor;

        self.last_touch_angle = touch_angle;
        self.dragged_angle += delta.abs();
        delta
    }

    /// Leave Dragging and estimate the fling torque (force × radius)
    pub fn release(&mut self, wheel: &Circle) -> f32 {
        self.dragging = false;
        let force = self.tracker.velocity();
        let radius = wheel.center - self.last_position;
        cross(force, radius)
    }
}
