//! Visual policies applied to items each frame
//!
//! - `ItemTransform`: turns an item's rotated circle into draw bounds
//! - `SelectionTransform`: adjusts the selection visual (e.g. its opacity)
//!
//! Both are plain capabilities; closures with the right signature work too.

use crate::consts::FULL_ALPHA;
use crate::geometry::Rect;
use crate::wheel::ItemState;

/// Maps an item's computed state to its final draw bounds
///
/// Must be a pure function of `state`.
pub trait ItemTransform {
    fn transform(&self, state: &ItemState) -> Rect;
}

impl<F> ItemTransform for F
where
    F: Fn(&ItemState) -> Rect,
{
    fn transform(&self, state: &ItemState) -> Rect {
        self(state)
    }
}

/// The highlight drawn behind the selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionVisual {
    pub bounds: Rect,
    pub alpha: u8,
}

impl SelectionVisual {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            alpha: FULL_ALPHA,
        }
    }
}

/// Mutates the selection visual based on how far the selected item is from
/// the selection angle
pub trait SelectionTransform {
    fn transform(&self, visual: &mut SelectionVisual, state: &ItemState);
}

impl<F> SelectionTransform for F
where
    F: Fn(&mut SelectionVisual, &ItemState),
{
    fn transform(&self, visual: &mut SelectionVisual, state: &ItemState) {
        self(visual, state)
    }
}

/// Draw bounds are the item circle's bounding box
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleItemTransform;

impl ItemTransform for SimpleItemTransform {
    fn transform(&self, state: &ItemState) -> Rect {
        state.bounds.bounding_box()
    }
}

/// Items grow slightly near the selection angle and shrink away from it
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalingItemTransform;

impl ScalingItemTransform {
    pub fn scale(angle_from_selection: f32) -> f32 {
        let scale = angle_from_selection * 0.014;
        (1.15 - scale.abs().min(0.25)).min(1.12)
    }
}

impl ItemTransform for ScalingItemTransform {
    fn transform(&self, state: &ItemState) -> Rect {
        let mut bounds = state.bounds;
        bounds.radius *= Self::scale(state.angle_from_selection);
        bounds.bounding_box()
    }
}

/// Selection fades out as the selected item moves away from the selection angle
#[derive(Debug, Clone, Copy, Default)]
pub struct FadingSelectionTransform;

impl FadingSelectionTransform {
    pub fn alpha(relative_position: f32) -> u8 {
        let alpha = (1.0 - relative_position.abs().powf(2.5)) * 255.0;
        alpha.clamp(0.0, 255.0) as u8
    }
}

impl SelectionTransform for FadingSelectionTransform {
    fn transform(&self, visual: &mut SelectionVisual, state: &ItemState) {
        visual.alpha = Self::alpha(state.relative_position);
    }
}
