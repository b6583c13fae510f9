//! Wheel View - angular physics and layout for a rotating item wheel
//!
//! Core modules:
//! - `geometry`: Pure shapes (circles, integer rectangles)
//! - `wheel`: Stateful engine (physics, gestures, layout, cache, frame pass)
//! - `adapter`: Content provider contract
//! - `transform`: Pluggable item/selection visual policies
//! - `config`: Serializable wheel configuration
//! - `error`: Crate error type

pub mod adapter;
pub mod config;
pub mod error;
pub mod geometry;
pub mod transform;
pub mod wheel;

pub use adapter::{ArrayAdapter, WheelAdapter};
pub use config::{Dimension, Padding, PhysicsTuning, SelectionRounding, WheelConfig, WheelPosition};
pub use error::{Result, WheelError};
pub use geometry::{Circle, Rect};
pub use transform::{
    FadingSelectionTransform, ItemTransform, ScalingItemTransform, SelectionTransform,
    SelectionVisual, SimpleItemTransform,
};
pub use wheel::{Frame, ItemFrame, ItemState, TouchAction, TouchEvent, Wheel};

use glam::Vec2;

/// Engine tuning constants
pub mod consts {
    /// Friction proportional to velocity squared (per tick)
    pub const VELOCITY_FRICTION_COEFFICIENT: f32 = 0.015;
    /// Constant friction floor (per tick), guarantees the wheel stops
    pub const CONSTANT_FRICTION_COEFFICIENT: f32 = 0.0028;
    /// Angular acceleration to initial angular velocity gain
    pub const ANGULAR_VEL_COEFFICIENT: f32 = 22.0;
    /// Maximum fling velocity (degrees per millisecond)
    pub const MAX_ANGULAR_VEL: f32 = 0.3;

    /// Number of radial damping buckets
    pub const TOUCH_FACTOR_SIZE: usize = 20;
    /// Damping applied to drags at the rim of the wheel
    pub const TOUCH_DRAG_COEFFICIENT: f32 = 0.8;

    /// Most item slots a wheel may have (one per degree)
    pub const MAX_ITEM_COUNT: u32 = 360;

    /// Total dragged angle (degrees) below which a touch counts as a click
    pub const CLICK_MAX_DRAGGED_ANGLE: f32 = 0.7;

    /// Opaque alpha for selection visuals
    pub const FULL_ALPHA: u8 = 255;
}

/// Normalize an angle in degrees to [-180, 180)
///
/// Uses the double-mod pattern so negative inputs land in range.
#[inline]
pub fn normalize_to_180(angle: f32) -> f32 {
    (((angle + 180.0) % 360.0 + 360.0) % 360.0) - 180.0
}

/// Shortest signed difference `a - b` for angles already in [-180, 180]
#[inline]
pub fn shortest_angle(a: f32, b: f32) -> f32 {
    let angle = a - b;
    if angle > 180.0 {
        angle - 360.0
    } else if angle < -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Wrap any integer into [0, modulus)
///
/// Exact for large negative values. A non-positive modulus has no valid
/// range and maps everything to 0.
#[inline]
pub fn wrap_index(value: i32, modulus: i32) -> i32 {
    if modulus <= 0 {
        return 0;
    }
    value.rem_euclid(modulus)
}

/// 2D cross product (`a.x * b.y - a.y * b.x`)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// Sign of `value` with zero mapping to zero
#[inline]
pub(crate) fn signum_or_zero(value: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value.signum() }
}

/// Point at `distance` from `center` along `angle` (radians, y-down)
#[inline]
pub fn polar_offset(center: Vec2, distance: f32, angle: f32) -> Vec2 {
    center + Vec2::new(distance * angle.cos(), distance * angle.sin())
}
