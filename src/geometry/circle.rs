//! Circle geometry for the wheel and its item slots
//!
//! A circle is a center and a radius in screen space:
//! - containment is inclusive of the rim
//! - angles are measured from the center, y-up, in [-180, 180] degrees

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// A circle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    /// Center point (pixels, y-down)
    pub center: Vec2,
    /// Radius (pixels, never negative)
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "circle radius must not be negative");
        Self { center, radius }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.center.x
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.center.y
    }

    /// Check if a point lies inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Smallest integer rectangle enclosing the circle (rounded edges)
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            (self.center.x - self.radius).round() as i32,
            (self.center.y - self.radius).round() as i32,
            (self.center.x + self.radius).round() as i32,
            (self.center.y + self.radius).round() as i32,
        )
    }

    /// Angle from the center to `point` in radians (y-up)
    pub fn angle_to(&self, point: Vec2) -> f32 {
        (self.center.y - point.y).atan2(point.x - self.center.x)
    }

    /// Angle from the center to `point` in degrees, in [-180, 180]
    pub fn angle_to_degrees(&self, point: Vec2) -> f32 {
        self.angle_to(point).to_degrees()
    }

    /// Squared distance from the center to `point` relative to the squared radius
    ///
    /// 0 at the hub, 1 on the rim. A zero radius yields infinity for any
    /// point away from the center.
    pub fn relative_distance_squared(&self, point: Vec2) -> f32 {
        self.center.distance_squared(point) / (self.radius * self.radius)
    }

    /// Rotate this circle's center about `pivot` by `angle` degrees
    ///
    /// Uses the y-down rotation matrix, so a positive angle turns clockwise
    /// on screen. The radius is unchanged.
    pub fn rotated_about(&self, pivot: Vec2, angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        let offset = self.center - pivot;
        let rotated = Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos);
        Self {
            center: pivot + rotated,
            radius: self.radius,
        }
    }
}
