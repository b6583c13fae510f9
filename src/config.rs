//! Wheel configuration
//!
//! Everything a host supplies when building a wheel. Deserialized from JSON
//! with serde; missing fields fall back to `Default`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, WheelError};

/// A length that is either fixed or fills the space available to it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Take all available space
    #[default]
    Fill,
    /// Fixed size in pixels
    Fixed(f32),
}

impl Dimension {
    /// Resolve to pixels, using `available` when filling
    pub fn resolve(self, available: f32) -> f32 {
        match self {
            Dimension::Fill => available,
            Dimension::Fixed(px) => px,
        }
    }

    pub fn fixed(self) -> Option<f32> {
        match self {
            Dimension::Fill => None,
            Dimension::Fixed(px) => Some(px),
        }
    }
}

/// Wheel alignment inside its container (bit flags)
///
/// An empty set centers the wheel. Each flag moves the center to that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WheelPosition(pub u8);

impl WheelPosition {
    pub const CENTER: Self = Self(0);
    pub const LEFT: Self = Self(0x01);
    pub const RIGHT: Self = Self(0x02);
    pub const TOP: Self = Self(0x04);
    pub const BOTTOM: Self = Self(0x08);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_left(self) -> bool {
        self.contains(Self::LEFT)
    }

    pub fn is_right(self) -> bool {
        self.contains(Self::RIGHT)
    }

    pub fn is_top(self) -> bool {
        self.contains(Self::TOP)
    }

    pub fn is_bottom(self) -> bool {
        self.contains(Self::BOTTOM)
    }

    /// Relative center inside the container, each axis in [0, 1]
    pub fn relative_center(self) -> Vec2 {
        let mut horizontal = 0.5;
        let mut vertical = 0.5;
        if self.is_left() {
            horizontal -= 0.5;
        }
        if self.is_right() {
            horizontal += 0.5;
        }
        if self.is_top() {
            vertical -= 0.5;
        }
        if self.is_bottom() {
            vertical += 0.5;
        }
        Vec2::new(horizontal, vertical)
    }
}

impl std::ops::BitOr for WheelPosition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Container padding (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn uniform(amount: f32) -> Self {
        Self {
            left: amount,
            top: amount,
            right: amount,
            bottom: amount,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// How a wheel angle is rounded to a raw selected position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionRounding {
    /// Item whose center is nearest the selection angle
    #[default]
    Nearest,
    /// Whole items passed, truncated toward zero
    TowardZero,
}

/// Friction and fling response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Friction per tick proportional to velocity squared
    pub velocity_friction: f32,
    /// Constant friction per tick
    pub constant_friction: f32,
    /// Angular acceleration to velocity gain
    pub velocity_gain: f32,
    /// Velocity clamp (degrees per millisecond)
    pub max_angular_velocity: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            velocity_friction: VELOCITY_FRICTION_COEFFICIENT,
            constant_friction: CONSTANT_FRICTION_COEFFICIENT,
            velocity_gain: ANGULAR_VEL_COEFFICIENT,
            max_angular_velocity: MAX_ANGULAR_VEL,
        }
    }
}

impl PhysicsTuning {
    pub fn validate(&self) -> Result<()> {
        if !(self.velocity_friction >= 0.0) {
            return Err(WheelError::InvalidPhysics("velocity friction must not be negative"));
        }
        // Without a constant term a fling would only approach zero
        if !(self.constant_friction > 0.0) {
            return Err(WheelError::InvalidPhysics("constant friction must be positive"));
        }
        if !(self.velocity_gain > 0.0) {
            return Err(WheelError::InvalidPhysics("velocity gain must be positive"));
        }
        if !(self.max_angular_velocity > 0.0) || !self.max_angular_velocity.is_finite() {
            return Err(WheelError::InvalidPhysics("max angular velocity must be positive"));
        }
        Ok(())
    }

    /// Upper bound on ticks for a fling starting at max velocity to stop
    pub fn max_settle_ticks(&self) -> u32 {
        ((self.max_angular_velocity / self.constant_friction).ceil() as u32).saturating_add(1)
    }
}

/// Full wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Wheel radius, or fill the container minus its padding
    pub wheel_radius: Dimension,
    /// Number of item slots around the wheel (0 = use `item_angle`)
    pub item_count: u32,
    /// Angular spacing per item in degrees (used when `item_count` is 0)
    pub item_angle: f32,
    /// Extra degrees added to `item_angle`
    pub item_angle_padding: f32,
    /// Angle at which an item counts as selected (degrees)
    pub selection_angle: f32,
    /// Radius of each item circle
    pub item_radius: f32,
    /// Distance from wheel center to item centers
    pub wheel_to_item_distance: Dimension,
    /// Cycle adapter items forever
    pub repeatable: bool,
    /// Rotate the wheel drawable with the wheel angle
    pub wheel_drawable_rotatable: bool,
    /// Extra pixels around the selected item's bounds
    pub selection_padding: f32,
    /// Gap between item circles and the wheel rim when the item distance fills
    pub wheel_padding: f32,
    /// Horizontal offset of the wheel center
    pub offset_x: f32,
    /// Vertical offset of the wheel center
    pub offset_y: f32,
    /// Alignment inside the container
    pub position: WheelPosition,
    /// Container padding
    pub padding: Padding,
    /// Fling physics
    pub physics: PhysicsTuning,
    /// Dragged angle (degrees) below which a touch is a click
    pub click_max_dragged_angle: f32,
    /// Selection tie-break
    pub selection_rounding: SelectionRounding,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            wheel_radius: Dimension::Fill,
            item_count: 0,
            item_angle: 45.0,
            item_angle_padding: 0.0,
            selection_angle: 0.0,
            item_radius: 0.0,
            wheel_to_item_distance: Dimension::Fill,
            repeatable: false,
            wheel_drawable_rotatable: true,
            selection_padding: 0.0,
            wheel_padding: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            position: WheelPosition::CENTER,
            padding: Padding::default(),
            physics: PhysicsTuning::default(),
            click_max_dragged_angle: CLICK_MAX_DRAGGED_ANGLE,
            selection_rounding: SelectionRounding::Nearest,
        }
    }
}

impl WheelConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded wheel config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fail fast on anything that would produce a broken wheel
    pub fn validate(&self) -> Result<()> {
        if let Some(radius) = self.wheel_radius.fixed() {
            validate_wheel_radius(radius)?;
        }
        if !(self.item_radius >= 0.0) || !self.item_radius.is_finite() {
            return Err(WheelError::InvalidItemRadius(self.item_radius));
        }
        if let Some(distance) = self.wheel_to_item_distance.fixed() {
            if !(distance >= 0.0) || !distance.is_finite() {
                return Err(WheelError::InvalidItemDistance(distance));
            }
        }
        self.resolve_item_spacing()?;
        self.physics.validate()
    }

    /// Resolve (item count, item angle) from whichever setting is present
    ///
    /// Item count wins over item angle. With neither, the angle is derived
    /// from the item radius and a fixed item distance.
    pub fn resolve_item_spacing(&self) -> Result<(u32, f32)> {
        if self.item_count > 0 {
            validate_item_count(self.item_count)?;
            return Ok((self.item_count, item_angle_for_count(self.item_count)));
        }
        if self.item_angle != 0.0 {
            let angle = self.item_angle + self.item_angle_padding;
            let count = item_count_for_angle(angle)?;
            return Ok((count, angle));
        }
        match self.wheel_to_item_distance.fixed() {
            Some(distance) if self.item_radius > 0.0 && distance > self.item_radius => {
                let angle = 2.0 * (self.item_radius / distance).asin().to_degrees()
                    + self.item_angle_padding;
                let count = item_count_for_angle(angle)?;
                Ok((count, angle))
            }
            _ => Err(WheelError::MissingItemLayout),
        }
    }
}

pub(crate) fn validate_wheel_radius(radius: f32) -> Result<()> {
    if !(radius >= 0.0) || !radius.is_finite() {
        return Err(WheelError::InvalidWheelRadius(radius));
    }
    Ok(())
}

pub(crate) fn validate_item_count(count: u32) -> Result<()> {
    if count == 0 || count > MAX_ITEM_COUNT {
        return Err(WheelError::InvalidItemCount(count));
    }
    Ok(())
}

pub(crate) fn item_angle_for_count(count: u32) -> f32 {
    360.0 / count as f32
}

/// Number of whole slots that fit around the wheel at `angle` spacing
pub(crate) fn item_count_for_angle(angle: f32) -> Result<u32> {
    if !(angle > 0.0) || angle > 360.0 {
        return Err(WheelError::InvalidItemAngle(angle));
    }
    let count = (360.0 / angle) as u32;
    if count > MAX_ITEM_COUNT {
        return Err(WheelError::InvalidItemAngle(angle));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_ITEM_COUNT;

    #[test]
    fn test_default_config_is_valid() {
        let config = WheelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolve_item_spacing().unwrap(), (8, 45.0));
    }

    #[test]
    fn test_item_count_wins_over_angle() {
        let config = WheelConfig {
            item_count: 12,
            item_angle: 45.0,
            ..Default::default()
        };
        assert_eq!(config.resolve_item_spacing().unwrap(), (12, 30.0));
    }

    #[test]
    fn test_item_angle_includes_padding() {
        let config = WheelConfig {
            item_angle: 40.0,
            item_angle_padding: 5.0,
            ..Default::default()
        };
        assert_eq!(config.resolve_item_spacing().unwrap(), (8, 45.0));

        let config = WheelConfig {
            item_angle: 50.0,
            ..Default::default()
        };
        // floor(360 / 50)
        assert_eq!(config.resolve_item_spacing().unwrap(), (7, 50.0));
    }

    #[test]
    fn test_item_angle_derived_from_radius() {
        let config = WheelConfig {
            item_angle: 0.0,
            item_radius: 50.0,
            wheel_to_item_distance: Dimension::Fixed(100.0),
            ..Default::default()
        };
        // 2 * asin(0.5) = 60 degrees
        let (count, angle) = config.resolve_item_spacing().unwrap();
        assert!((angle - 60.0).abs() < 0.001);
        assert!(count == 6 || count == 5);
    }

    #[test]
    fn test_missing_item_layout() {
        let config = WheelConfig {
            item_angle: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::MissingItemLayout)));
    }

    #[test]
    fn test_invalid_values_fail_fast() {
        let config = WheelConfig {
            wheel_radius: Dimension::Fixed(-5.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidWheelRadius(_))));

        let config = WheelConfig {
            item_radius: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemRadius(_))));

        let config = WheelConfig {
            item_angle: 400.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemAngle(_))));

        let config = WheelConfig {
            physics: PhysicsTuning {
                constant_friction: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidPhysics(_))));
    }

    #[test]
    fn test_item_count_upper_bound() {
        let config = WheelConfig {
            item_count: MAX_ITEM_COUNT,
            ..Default::default()
        };
        assert_eq!(config.resolve_item_spacing().unwrap(), (360, 1.0));

        let config = WheelConfig {
            item_count: MAX_ITEM_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemCount(361))));

        let config = WheelConfig {
            item_count: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemCount(_))));
    }

    #[test]
    fn test_tiny_item_angle_rejected() {
        let config = WheelConfig {
            item_angle: 1.0e-9,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemAngle(_))));

        let config = WheelConfig {
            item_angle: 0.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemAngle(_))));

        // Derived from a tiny item radius
        let config = WheelConfig {
            item_angle: 0.0,
            item_radius: 1.0e-6,
            wheel_to_item_distance: Dimension::Fixed(100.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(WheelError::InvalidItemAngle(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "wheel_radius": { "fixed": 150.0 },
            "item_count": 10,
            "item_radius": 20.0,
            "repeatable": true,
            "position": 9,
            "selection_rounding": "toward_zero"
        }"#;
        let config = WheelConfig::from_json(json).unwrap();
        assert_eq!(config.wheel_radius, Dimension::Fixed(150.0));
        assert_eq!(config.item_count, 10);
        assert!(config.repeatable);
        assert!(config.wheel_drawable_rotatable);
        assert!(config.position.is_left());
        assert!(config.position.is_bottom());
        assert!(!config.position.is_top());
        assert_eq!(config.selection_rounding, SelectionRounding::TowardZero);
        assert_eq!(config.wheel_to_item_distance, Dimension::Fill);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            WheelConfig::from_json("{ not json"),
            Err(WheelError::Config(_))
        ));
        assert!(matches!(
            WheelConfig::from_json(r#"{ "item_count": 0, "item_angle": -3.0 }"#),
            Err(WheelError::InvalidItemAngle(_))
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let config = WheelConfig {
            item_count: 6,
            wheel_to_item_distance: Dimension::Fixed(80.0),
            position: WheelPosition::RIGHT | WheelPosition::TOP,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(WheelConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_relative_center() {
        assert_eq!(WheelPosition::CENTER.relative_center(), Vec2::new(0.5, 0.5));
        assert_eq!(WheelPosition::LEFT.relative_center(), Vec2::new(0.0, 0.5));
        assert_eq!(
            (WheelPosition::RIGHT | WheelPosition::BOTTOM).relative_center(),
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_max_settle_ticks() {
        let physics = PhysicsTuning::default();
        // 0.3 / 0.0028 = 107.1
        assert_eq!(physics.max_settle_ticks(), 109);

        let sticky = PhysicsTuning {
            constant_friction: 1.0e-30,
            ..Default::default()
        };
        assert!(sticky.validate().is_ok());
        assert_eq!(sticky.max_settle_ticks(), u32::MAX);
    }
}
