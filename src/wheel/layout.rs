//! Wheel layout and position mapping
//!
//! A layout pass resolves the wheel circle inside its container and places
//! `item_count` reference slots around it. Slots are laid out once per pass,
//! unrotated; each frame rotates them by the wheel angle.
//!
//! Raw positions are unbounded. They map to:
//! - an adapter position (wrapped when repeatable, otherwise unchanged)
//! - a wheel slot in `[0, item_count)`

use glam::Vec2;

use crate::config::WheelConfig;
use crate::geometry::{Circle, Rect};
use crate::{polar_offset, wrap_index};

/// Item count and angular spacing resolved from configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpacing {
    pub count: usize,
    /// Degrees between neighbouring slots
    pub angle: f32,
}

/// Geometry produced by a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    pub wheel_bounds: Circle,
    /// Container rectangle in local coordinates
    pub view_bounds: Rect,
    pub item_radius: f32,
    pub wheel_to_item_distance: f32,
    /// Unrotated slot circles, index = wheel slot
    pub item_slots: Vec<Circle>,
}

impl WheelGeometry {
    /// Lay out a wheel in a `width` × `height` container
    ///
    /// Returns `None` for an empty container so callers keep their previous
    /// geometry.
    pub fn compute(
        config: &WheelConfig,
        spacing: ItemSpacing,
        selection_angle: f32,
        width: f32,
        height: f32,
    ) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }

        let relative = config.position.relative_center();
        let center = Vec2::new(
            config.offset_x + width * relative.x,
            config.offset_y + height * relative.y,
        );

        let fill_radius = (width - config.padding.horizontal())
            .min(height - config.padding.vertical())
            / 2.0;
        let radius = config.wheel_radius.resolve(fill_radius).max(0.0);
        let wheel_bounds = Circle::new(center, radius);

        let fill_distance = radius - config.item_radius - config.wheel_padding;
        let distance = config.wheel_to_item_distance.resolve(fill_distance).max(0.0);

        let item_slots =
            layout_item_slots(center, distance, config.item_radius, spacing, selection_angle);

        log::debug!(
            "Wheel layout: center=({:.1}, {:.1}) radius={:.1} item_distance={:.1} slots={}",
            center.x,
            center.y,
            radius,
            distance,
            item_slots.len()
        );

        Some(Self {
            wheel_bounds,
            view_bounds: Rect::from_size(0, 0, width as i32, height as i32),
            item_radius: config.item_radius,
            wheel_to_item_distance: distance,
            item_slots,
        })
    }

    /// Slot `slot` rotated by the wheel `angle` (degrees) about the center
    pub fn rotated_slot(&self, slot: usize, angle: f32) -> Option<Circle> {
        self.item_slots
            .get(slot)
            .map(|circle| circle.rotated_about(self.wheel_bounds.center, angle))
    }
}

/// Unrotated slot circles, slot 0 at the selection angle
pub fn layout_item_slots(
    center: Vec2,
    distance: f32,
    item_radius: f32,
    spacing: ItemSpacing,
    selection_angle: f32,
) -> Vec<Circle> {
    let item_angle = spacing.angle.to_radians();
    let offset = (-selection_angle).to_radians();
    (0..spacing.count)
        .map(|i| {
            let angle = item_angle * i as f32 + offset;
            Circle::new(polar_offset(center, distance, angle), item_radius)
        })
        .collect()
}

/// Raw/adapter/slot index arithmetic for one wheel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionMap {
    pub adapter_count: i32,
    pub item_count: i32,
    pub repeatable: bool,
}

impl PositionMap {
    pub fn new(adapter_count: usize, item_count: usize, repeatable: bool) -> Self {
        // Counts past i32::MAX saturate; every raw position fits below them
        Self {
            adapter_count: i32::try_from(adapter_count).unwrap_or(i32::MAX),
            item_count: i32::try_from(item_count).unwrap_or(i32::MAX),
            repeatable,
        }
    }

    /// Adapter position for a raw position
    pub fn raw_to_adapter(&self, raw: i32) -> i32 {
        if self.repeatable {
            wrap_index(raw, self.adapter_count)
        } else {
            raw
        }
    }

    /// Wheel slot hosting `raw` (whose adapter position is `adapter_position`)
    ///
    /// When repeating, each full cycle of the adapter shifts the slot by the
    /// difference between adapter size and slot count, so consecutive raw
    /// positions always land in consecutive slots.
    pub fn raw_to_slot(&self, raw: i32, adapter_position: i32) -> usize {
        let circular_offset = if self.repeatable && self.adapter_count > 0 {
            i64::from(raw.div_euclid(self.adapter_count))
                * i64::from(self.adapter_count - self.item_count)
        } else {
            0
        };
        let position = i64::from(adapter_position) + circular_offset;
        if self.item_count <= 0 {
            return 0;
        }
        position.rem_euclid(i64::from(self.item_count)) as usize
    }

    pub fn raw_to_slot_position(&self, raw: i32) -> usize {
        self.raw_to_slot(raw, self.raw_to_adapter(raw))
    }

    /// Positions outside the adapter on a non-repeating wheel hold no item
    pub fn is_empty(&self, position: i32) -> bool {
        !self.repeatable && (position < 0 || position >= self.adapter_count)
    }
}
