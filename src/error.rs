//! Wheel error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Invalid wheel radius: {0}")]
    InvalidWheelRadius(f32),
    #[error("Invalid item radius: {0}")]
    InvalidItemRadius(f32),
    #[error("Invalid wheel to item distance: {0}")]
    InvalidItemDistance(f32),
    #[error("Invalid item count: {0} (must be at least 1)")]
    InvalidItemCount(u32),
    #[error("Invalid item angle: {0} (must be in (0, 360])")]
    InvalidItemAngle(f32),
    #[error("Item spacing not configured: set an item count, an item angle, or an item radius with a fixed item distance")]
    MissingItemLayout,
    #[error("Invalid physics tuning: {0}")]
    InvalidPhysics(&'static str),
    #[error("Cannot select position with no adapter items")]
    NoAdapter,
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WheelError>;
