//! Mapping the wheel angle to a selected raw position

use crate::config::SelectionRounding;
use crate::signum_or_zero;

/// Raw position selected at wheel `angle` with `item_angle` spacing
///
/// Rotating the wheel by `-k * item_angle` brings raw position `k` to the
/// selection angle, hence the negated angle.
pub fn raw_position_for_angle(angle: f32, item_angle: f32, rounding: SelectionRounding) -> i32 {
    let position = match rounding {
        SelectionRounding::Nearest => {
            (-angle - 0.5 * signum_or_zero(angle) * item_angle) / item_angle
        }
        SelectionRounding::TowardZero => -angle / item_angle,
    };
    // Truncates toward zero; saturates on overflow
    position as i32
}
