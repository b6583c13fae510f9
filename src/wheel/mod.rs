//! The wheel engine
//!
//! This module contains everything that turns input and time into a wheel
//! angle and a drawable frame:
//! - Angular fling physics with friction
//! - Drag tracking and fling torque estimation
//! - Layout of item slots and raw/adapter/slot position mapping
//! - Selection from the wheel angle
//! - Content cache and visibility tracking
//! - The per-frame driver

pub mod cache;
pub mod gesture;
pub mod layout;
pub mod listeners;
pub mod physics;
pub mod selection;
pub mod state;
pub mod tick;
pub mod view;

pub use cache::{CacheEntry, EMPTY_ENTRY, EntryState, ItemCache};
pub use gesture::{TOUCH_FACTORS, TouchAction, TouchController, TouchEvent, VelocityTracker, touch_factor};
pub use layout::{ItemSpacing, PositionMap, WheelGeometry, layout_item_slots};
pub use listeners::Listeners;
pub use physics::{AngularPhysics, Motion, MotionPhase};
pub use selection::raw_position_for_angle;
pub use state::ItemState;
pub use tick::{Frame, ItemFrame};
pub use view::Wheel;
