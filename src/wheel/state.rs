//! Per-frame item state

use serde::{Deserialize, Serialize};

use crate::geometry::Circle;
use crate::shortest_angle;

/// Where one visible item sits this frame
///
/// Recomputed every frame for each raw position in the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemState {
    /// Adapter position (out of range for empty positions)
    pub adapter_position: i32,
    /// Rotated item circle in screen space
    pub bounds: Circle,
    /// Signed degrees between the item and the selection angle
    pub angle_from_selection: f32,
    /// `angle_from_selection` in half-item units (|x| < 1 means selected)
    pub relative_position: f32,
}

impl ItemState {
    pub fn new(
        wheel: &Circle,
        bounds: Circle,
        adapter_position: i32,
        selection_angle: f32,
        item_angle: f32,
    ) -> Self {
        let angle = wheel.angle_to_degrees(bounds.center);
        let angle_from_selection = shortest_angle(angle, selection_angle);
        Self {
            adapter_position,
            bounds,
            angle_from_selection,
            relative_position: angle_from_selection / item_angle * 2.0,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.relative_position.abs() < 1.0
    }
}
