//! Frame driver
//!
//! The host calls `tick` once per animation frame while `needs_tick` is
//! true, then `frame` to get everything it needs to draw. The frame pass
//! also runs visibility tracking:
//! - each raw position in a window of `item_count` around the selection is
//!   rotated into place and tested against the view bounds
//! - visibility listeners fire only on edges, from a per-frame diff
//! - content is fetched for visible, non-empty positions that are dirty

use std::collections::BTreeSet;

use serde::Serialize;

use super::physics::Motion;
use super::state::ItemState;
use super::view::Wheel;
use crate::adapter::WheelAdapter;
use crate::geometry::Rect;
use crate::transform::SelectionVisual;

/// One item as drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemFrame {
    pub raw_position: i32,
    pub adapter_position: i32,
    /// Wheel slot the item occupies
    pub slot: usize,
    pub state: ItemState,
    /// Draw bounds from the item transform
    pub bounds: Rect,
    /// Bounds intersect the view
    pub visible: bool,
    /// No adapter item at this position; hosts draw their empty-item
    /// placeholder (or nothing) here
    pub empty: bool,
}

/// Everything needed to draw the wheel once
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub wheel_bounds: Rect,
    /// Degrees to rotate the wheel drawable by
    pub wheel_rotation: f32,
    pub items: Vec<ItemFrame>,
    /// Highlight behind the selected item, absent when the selection is
    /// empty or off screen
    pub selection: Option<SelectionVisual>,
}

impl Frame {
    pub fn visible_items(&self) -> impl Iterator<Item = &ItemFrame> {
        self.items.iter().filter(|item| item.visible && !item.empty)
    }
}

impl<A: WheelAdapter> Wheel<A> {
    /// True while a fling is settling
    pub fn needs_tick(&self) -> bool {
        self.physics.is_settling()
    }

    /// Advance the fling to `now_ms`
    ///
    /// Returns true when the wheel turned and should be redrawn.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.physics.advance(now_ms) {
            Motion::Idle => false,
            Motion::Moved(delta) => {
                self.add_angle(delta);
                true
            }
            Motion::Settled => {
                log::debug!(
                    "Wheel settled at {:.2} degrees (raw position {})",
                    self.angle,
                    self.raw_selected
                );
                false
            }
        }
    }

    /// Run the visibility pass and describe the wheel for drawing
    ///
    /// `None` until the first layout.
    pub fn frame(&mut self) -> Option<Frame> {
        let geometry = self.geometry.as_ref()?;
        let wheel = geometry.wheel_bounds;
        let view = geometry.view_bounds;
        let positions = self.positions();
        let selection_angle = self.config.selection_angle;
        let item_angle = self.spacing.angle;
        let count = self.spacing.count as i32;
        let first = window_start(self.raw_selected, count);

        let mut item_states = vec![None; self.spacing.count];
        let mut items = Vec::with_capacity(self.spacing.count);
        let mut visible_positions = BTreeSet::new();
        let mut selection = None;

        for raw in first..first + count {
            let adapter_position = positions.raw_to_adapter(raw);
            let slot = positions.raw_to_slot(raw, adapter_position);
            let Some(circle) = geometry.rotated_slot(slot, self.angle) else {
                continue;
            };

            let state = ItemState::new(&wheel, circle, adapter_position, selection_angle, item_angle);
            let bounds = self.item_transform.transform(&state);
            let empty = positions.is_empty(adapter_position);
            let visible = bounds.intersects(&view);
            item_states[slot] = Some(state);

            if visible && !empty {
                visible_positions.insert(adapter_position);
                if let Some(adapter) = self.adapter.as_mut() {
                    self.cache.fetch(adapter_position, adapter);
                }
            }

            if raw == self.raw_selected && visible && !empty {
                let mut visual =
                    SelectionVisual::new(bounds.expanded_by(self.config.selection_padding as i32));
                self.selection_transform.transform(&mut visual, &state);
                selection = Some(visual);
            }

            items.push(ItemFrame {
                raw_position: raw,
                adapter_position,
                slot,
                state,
                bounds,
                visible,
                empty,
            });
        }

        let wheel_bounds = wheel.bounding_box();
        self.item_states = item_states;
        self.update_visibility(visible_positions);

        Some(Frame {
            wheel_bounds,
            wheel_rotation: if self.config.wheel_drawable_rotatable {
                self.angle
            } else {
                0.0
            },
            items,
            selection,
        })
    }

    /// Fire visibility edges against the previous frame
    fn update_visibility(&mut self, visible: BTreeSet<i32>) {
        for &position in visible.difference(&self.visible_positions) {
            if self.cache.set_visible(position, true) {
                self.listeners.visibility_changed(position, true);
            }
        }
        for &position in self.visible_positions.difference(&visible) {
            if self.cache.set_visible(position, false) {
                self.listeners.visibility_changed(position, false);
            }
        }
        self.visible_positions = visible;
    }
}

/// First raw position of the `count`-wide window centred on `selected`
///
/// Shifted inward near the ends of the `i32` range so the whole window
/// stays representable.
fn window_start(selected: i32, count: i32) -> i32 {
    let first = i64::from(selected) - i64::from(count / 2);
    let last_start = i64::from(i32::MAX) - i64::from(count) + 1;
    first.clamp(i64::from(i32::MIN), last_start) as i32
}
