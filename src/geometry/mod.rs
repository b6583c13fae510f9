//! Pure geometry for the wheel
//!
//! Stateless shapes shared by layout, gesture and frame code. Screen
//! coordinates are y-down; angles reported by `Circle` are y-up so that a
//! positive angle is counter-clockwise on screen.

pub mod circle;
pub mod rect;

pub use circle::Circle;
pub use rect::Rect;
