//! The wheel engine
//!
//! Owns the configuration, layout, angle, physics, gesture state, content
//! cache and listeners for one wheel. All mutation happens through `&mut
//! self` on the host's UI thread.

use std::collections::BTreeSet;

use glam::Vec2;

use super::cache::{EntryState, ItemCache};
use super::gesture::{TouchAction, TouchController, TouchEvent};
use super::layout::{ItemSpacing, PositionMap, WheelGeometry};
use super::listeners::Listeners;
use super::physics::AngularPhysics;
use super::selection::raw_position_for_angle;
use super::state::ItemState;
use crate::adapter::WheelAdapter;
use crate::config::{
    Dimension, Padding, PhysicsTuning, SelectionRounding, WheelConfig, WheelPosition,
    validate_item_count,
};
use crate::error::{Result, WheelError};
use crate::geometry::{Circle, Rect};
use crate::normalize_to_180;
use crate::transform::{FadingSelectionTransform, ItemTransform, ScalingItemTransform, SelectionTransform};

pub struct Wheel<A: WheelAdapter> {
    pub(super) config: WheelConfig,
    pub(super) spacing: ItemSpacing,
    /// Last container size handed to `layout`
    container: Option<(f32, f32)>,
    pub(super) geometry: Option<WheelGeometry>,
    pub(super) angle: f32,
    pub(super) raw_selected: i32,
    pub(super) physics: AngularPhysics,
    touch: TouchController,
    /// Slot under the pointer when it went down
    clicked_slot: Option<usize>,
    /// Item state per wheel slot from the last frame
    pub(super) item_states: Vec<Option<ItemState>>,
    pub(super) adapter: Option<A>,
    pub(super) cache: ItemCache<A::Content>,
    /// Adapter positions visible in the last frame
    pub(super) visible_positions: BTreeSet<i32>,
    pub(super) item_transform: Box<dyn ItemTransform>,
    pub(super) selection_transform: Box<dyn SelectionTransform>,
    pub(super) listeners: Listeners,
}

impl<A: WheelAdapter> Wheel<A> {
    /// Build a wheel with the default scaling/fading transforms
    pub fn new(mut config: WheelConfig) -> Result<Self> {
        config.validate()?;
        config.selection_angle = normalize_to_180(config.selection_angle);
        let (count, angle) = config.resolve_item_spacing()?;

        Ok(Self {
            physics: AngularPhysics::new(config.physics),
            config,
            spacing: ItemSpacing {
                count: count as usize,
                angle,
            },
            container: None,
            geometry: None,
            angle: 0.0,
            raw_selected: 0,
            touch: TouchController::new(),
            clicked_slot: None,
            item_states: vec![None; count as usize],
            adapter: None,
            cache: ItemCache::default(),
            visible_positions: BTreeSet::new(),
            item_transform: Box::new(ScalingItemTransform),
            selection_transform: Box::new(FadingSelectionTransform),
            listeners: Listeners::default(),
        })
    }

    pub fn with_adapter(config: WheelConfig, adapter: A) -> Result<Self> {
        let mut wheel = Self::new(config)?;
        wheel.set_adapter(adapter);
        Ok(wheel)
    }

    // === Adapter and content ===

    /// Replace the content provider and reset the cache
    pub fn set_adapter(&mut self, adapter: A) {
        let count = adapter.count();
        log::debug!("Adapter set with {} items", count);
        self.cache = ItemCache::new(count);
        self.visible_positions.clear();
        self.adapter = Some(adapter);
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    pub fn adapter_item_count(&self) -> usize {
        self.cache.len()
    }

    /// Content for an adapter position, fetched through the cache
    pub fn item_content(&mut self, position: i32) -> Option<&A::Content> {
        let adapter = self.adapter.as_mut()?;
        self.cache.fetch(position, adapter)
    }

    /// Content already in the cache
    pub fn cached_content(&self, position: i32) -> Option<&A::Content> {
        self.cache.content(position)
    }

    pub fn cache_state(&self, position: i32) -> &EntryState {
        self.cache.state(position)
    }

    /// Mark the item at a raw position for refetch
    pub fn invalidate(&mut self, raw_position: i32) {
        let position = self.positions().raw_to_adapter(raw_position);
        if self.is_empty_position(position) {
            return;
        }
        self.cache.invalidate(position);
    }

    pub fn invalidate_all(&mut self) {
        self.cache.invalidate_all();
    }

    // === Angle and selection ===

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
        self.update_selected_position();
        self.listeners.angle_changed(angle);
    }

    pub fn add_angle(&mut self, degrees: f32) {
        self.set_angle(self.angle + degrees);
    }

    /// Wheel angle that selects `raw_position`
    pub fn angle_for_position(&self, raw_position: i32) -> f32 {
        raw_position as f32 * self.spacing.angle
    }

    /// Rotate so `raw_position` sits at the selection angle
    pub fn set_selected(&mut self, raw_position: i32) {
        self.set_angle(-self.angle_for_position(raw_position));
    }

    /// Select the middle adapter item
    pub fn set_mid_selected(&mut self) -> Result<()> {
        let count = self.adapter_item_count();
        if self.adapter.is_none() || count == 0 {
            return Err(WheelError::NoAdapter);
        }
        self.set_selected((count / 2) as i32);
        Ok(())
    }

    pub fn raw_selected_position(&self) -> i32 {
        self.raw_selected
    }

    /// Adapter position of the selection (may be empty when not repeatable)
    pub fn selected_position(&self) -> i32 {
        self.positions().raw_to_adapter(self.raw_selected)
    }

    pub fn is_empty_position(&self, position: i32) -> bool {
        self.positions().is_empty(position)
    }

    pub fn raw_to_adapter_position(&self, raw_position: i32) -> i32 {
        self.positions().raw_to_adapter(raw_position)
    }

    pub fn raw_to_slot_position(&self, raw_position: i32) -> usize {
        self.positions().raw_to_slot_position(raw_position)
    }

    pub(super) fn positions(&self) -> PositionMap {
        PositionMap::new(self.adapter_item_count(), self.spacing.count, self.config.repeatable)
    }

    fn update_selected_position(&mut self) {
        let position =
            raw_position_for_angle(self.angle, self.spacing.angle, self.config.selection_rounding);
        if position == self.raw_selected {
            return;
        }
        self.raw_selected = position;
        let adapter_position = self.selected_position();
        log::trace!("Selected raw position {} (adapter {})", position, adapter_position);

        if !self.is_empty_position(adapter_position) {
            self.listeners.item_selected(adapter_position);
        }
    }

    // === Configuration ===

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.spacing.count
    }

    pub fn item_angle(&self) -> f32 {
        self.spacing.angle
    }

    pub fn selection_angle(&self) -> f32 {
        self.config.selection_angle
    }

    /// Apply a configuration change, keeping the old state if it is invalid
    fn update_config(&mut self, change: impl FnOnce(&mut WheelConfig)) -> Result<()> {
        let mut config = self.config.clone();
        change(&mut config);
        config.validate()?;
        let (count, angle) = config.resolve_item_spacing()?;

        self.config = config;
        self.spacing = ItemSpacing {
            count: count as usize,
            angle,
        };
        self.physics.set_tuning(self.config.physics);
        self.relayout();
        self.update_selected_position();
        Ok(())
    }

    pub fn set_item_count(&mut self, count: u32) -> Result<()> {
        validate_item_count(count)?;
        self.update_config(|config| config.item_count = count)
    }

    /// Set the item spacing in degrees (padding is added on top)
    pub fn set_item_angle(&mut self, angle: f32) -> Result<()> {
        if !(angle > 0.0) {
            return Err(WheelError::InvalidItemAngle(angle));
        }
        self.update_config(|config| {
            config.item_count = 0;
            config.item_angle = angle;
        })
    }

    pub fn set_item_angle_padding(&mut self, padding: f32) -> Result<()> {
        self.update_config(|config| config.item_angle_padding = padding)
    }

    pub fn set_selection_angle(&mut self, angle: f32) -> Result<()> {
        self.update_config(|config| config.selection_angle = normalize_to_180(angle))
    }

    pub fn set_item_radius(&mut self, radius: f32) -> Result<()> {
        self.update_config(|config| config.item_radius = radius)
    }

    pub fn set_wheel_radius(&mut self, radius: Dimension) -> Result<()> {
        self.update_config(|config| config.wheel_radius = radius)
    }

    pub fn set_wheel_to_item_distance(&mut self, distance: Dimension) -> Result<()> {
        self.update_config(|config| config.wheel_to_item_distance = distance)
    }

    pub fn set_wheel_padding(&mut self, padding: f32) -> Result<()> {
        self.update_config(|config| config.wheel_padding = padding)
    }

    pub fn set_offsets(&mut self, offset_x: f32, offset_y: f32) -> Result<()> {
        self.update_config(|config| {
            config.offset_x = offset_x;
            config.offset_y = offset_y;
        })
    }

    pub fn set_position(&mut self, position: WheelPosition) -> Result<()> {
        self.update_config(|config| config.position = position)
    }

    pub fn set_padding(&mut self, padding: Padding) -> Result<()> {
        self.update_config(|config| config.padding = padding)
    }

    pub fn set_physics(&mut self, physics: PhysicsTuning) -> Result<()> {
        self.update_config(|config| config.physics = physics)
    }

    pub fn set_selection_rounding(&mut self, rounding: SelectionRounding) {
        self.config.selection_rounding = rounding;
        self.update_selected_position();
    }

    pub fn set_repeatable(&mut self, repeatable: bool) {
        self.config.repeatable = repeatable;
    }

    pub fn is_repeatable(&self) -> bool {
        self.config.repeatable
    }

    pub fn set_wheel_drawable_rotatable(&mut self, rotatable: bool) {
        self.config.wheel_drawable_rotatable = rotatable;
    }

    pub fn set_selection_padding(&mut self, padding: f32) {
        self.config.selection_padding = padding;
    }

    pub fn set_click_max_dragged_angle(&mut self, degrees: f32) {
        self.config.click_max_dragged_angle = degrees;
    }

    pub fn set_item_transform(&mut self, transform: impl ItemTransform + 'static) {
        self.item_transform = Box::new(transform);
    }

    pub fn set_selection_transform(&mut self, transform: impl SelectionTransform + 'static) {
        self.selection_transform = Box::new(transform);
    }

    // === Listeners ===

    pub fn set_on_angle_change(&mut self, listener: impl FnMut(f32) + 'static) {
        self.listeners.set_angle_change(listener);
    }

    pub fn set_on_item_selected(&mut self, listener: impl FnMut(i32) + 'static) {
        self.listeners.set_item_selected(listener);
    }

    pub fn set_on_item_click(&mut self, listener: impl FnMut(i32, bool) + 'static) {
        self.listeners.set_item_click(listener);
    }

    pub fn set_on_item_visibility_change(&mut self, listener: impl FnMut(i32, bool) + 'static) {
        self.listeners.set_visibility_change(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    // === Layout ===

    /// Lay the wheel out in a `width` × `height` container
    ///
    /// A zero-sized container keeps the previous geometry.
    pub fn layout(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            log::trace!("Skipping layout for empty container {}x{}", width, height);
            return;
        }
        self.container = Some((width, height));
        self.relayout();
    }

    fn relayout(&mut self) {
        self.item_states = vec![None; self.spacing.count];
        let Some((width, height)) = self.container else {
            return;
        };
        if let Some(geometry) = WheelGeometry::compute(
            &self.config,
            self.spacing,
            self.config.selection_angle,
            width,
            height,
        ) {
            self.geometry = Some(geometry);
        }
    }

    pub fn geometry(&self) -> Option<&WheelGeometry> {
        self.geometry.as_ref()
    }

    pub fn wheel_bounds(&self) -> Option<Circle> {
        self.geometry.as_ref().map(|g| g.wheel_bounds)
    }

    pub fn view_bounds(&self) -> Option<Rect> {
        self.geometry.as_ref().map(|g| g.view_bounds)
    }

    pub fn item_slots(&self) -> &[Circle] {
        self.geometry
            .as_ref()
            .map(|g| g.item_slots.as_slice())
            .unwrap_or(&[])
    }

    /// Item state for a wheel slot as of the last frame
    pub fn item_state(&self, slot: usize) -> Option<&ItemState> {
        self.item_states.get(slot).and_then(Option::as_ref)
    }

    // === Touch input ===

    pub fn is_dragging(&self) -> bool {
        self.touch.is_dragging()
    }

    pub fn angular_velocity(&self) -> f32 {
        self.physics.angular_velocity()
    }

    pub fn on_touch(&mut self, event: TouchEvent) {
        let Some(wheel) = self.wheel_bounds() else {
            log::warn!("Touch event before layout ignored: {:?}", event.action);
            return;
        };

        if !wheel.contains(event.position) {
            if self.touch.is_dragging() {
                self.fling(&wheel, event.time_ms);
            }
            return;
        }

        match event.action {
            TouchAction::Down => {
                if !self.touch.is_dragging() {
                    self.start_drag(&wheel, event);
                }
                self.clicked_slot = self.slot_at(event.position);
            }
            TouchAction::Move => {
                if !self.touch.is_dragging() {
                    self.start_drag(&wheel, event);
                }
                let delta = self.touch.drag(&wheel, event.position, event.time_ms);
                self.add_angle(delta);
            }
            TouchAction::Up => {
                self.click_if_tapped(event.position);
                if self.touch.is_dragging() {
                    self.fling(&wheel, event.time_ms);
                }
            }
            TouchAction::Cancel => {
                if self.touch.is_dragging() {
                    self.fling(&wheel, event.time_ms);
                }
            }
        }
    }

    pub fn on_pointer_down(&mut self, position: Vec2, time_ms: u64) {
        self.on_touch(TouchEvent::down(position, time_ms));
    }

    pub fn on_pointer_move(&mut self, position: Vec2, time_ms: u64) {
        self.on_touch(TouchEvent::moved(position, time_ms));
    }

    pub fn on_pointer_up(&mut self, position: Vec2, time_ms: u64) {
        self.on_touch(TouchEvent::up(position, time_ms));
    }

    pub fn on_pointer_cancel(&mut self, position: Vec2, time_ms: u64) {
        self.on_touch(TouchEvent::cancel(position, time_ms));
    }

    fn start_drag(&mut self, wheel: &Circle, event: TouchEvent) {
        self.touch.begin_drag(wheel, event.position, event.time_ms);
        self.physics.stop();
    }

    fn fling(&mut self, wheel: &Circle, now_ms: u64) {
        let torque = self.touch.release(wheel);
        self.physics.fling(torque, wheel.radius, now_ms);
    }

    fn slot_at(&self, position: Vec2) -> Option<usize> {
        self.item_states
            .iter()
            .position(|state| state.is_some_and(|s| s.bounds.contains(position)))
    }

    fn click_if_tapped(&mut self, position: Vec2) {
        let Some(slot) = self.clicked_slot.take() else {
            return;
        };
        if self.slot_at(position) != Some(slot)
            || self.touch.dragged_angle() >= self.config.click_max_dragged_angle
        {
            return;
        }
        let Some(state) = self.item_states[slot] else {
            return;
        };
        if self.is_empty_position(state.adapter_position) {
            return;
        }
        log::debug!("Item {} clicked", state.adapter_position);
        self.listeners
            .item_clicked(state.adapter_position, state.is_selected());
    }
}

impl<A: WheelAdapter> std::fmt::Debug for Wheel<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wheel")
            .field("angle", &self.angle)
            .field("raw_selected", &self.raw_selected)
            .field("spacing", &self.spacing)
            .field("geometry", &self.geometry)
            .field("physics", &self.physics)
            .field("adapter_item_count", &self.cache.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ArrayAdapter;
    use crate::consts::*;
    use crate::wheel::gesture::TOUCH_FACTORS;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Names = ArrayAdapter<&'static str, fn(usize, &&'static str) -> String>;

    fn names(count: usize) -> Names {
        const NAMES: [&str; 12] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ];
        fn to_content(_: usize, name: &&'static str) -> String {
            name.to_uppercase()
        }
        ArrayAdapter::new(NAMES[..count].to_vec(), to_content as fn(usize, &&'static str) -> String)
    }

    fn wheel(count: usize) -> Wheel<Names> {
        let config = WheelConfig {
            item_count: 8,
            item_radius: 20.0,
            ..Default::default()
        };
        let mut wheel = Wheel::with_adapter(config, names(count)).unwrap();
        wheel.layout(400.0, 400.0);
        wheel
    }

    /// Point at `degrees` (y-up) and `fraction` of the wheel radius
    fn at(wheel: &Wheel<Names>, degrees: f32, fraction: f32) -> Vec2 {
        let bounds = wheel.wheel_bounds().unwrap();
        let r = bounds.radius * fraction;
        let theta = degrees.to_radians();
        Vec2::new(bounds.center.x + r * theta.cos(), bounds.center.y - r * theta.sin())
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = WheelConfig {
            item_angle: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Wheel::<Names>::new(config),
            Err(WheelError::MissingItemLayout)
        ));
    }

    #[test]
    fn test_set_angle_updates_selection_and_fires() {
        let mut wheel = wheel(8);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let angles = Rc::new(RefCell::new(Vec::new()));
        let s = selected.clone();
        wheel.set_on_item_selected(move |position| s.borrow_mut().push(position));
        let a = angles.clone();
        wheel.set_on_angle_change(move |angle| a.borrow_mut().push(angle));

        wheel.set_angle(-45.0);
        assert_eq!(wheel.raw_selected_position(), 1);
        wheel.set_angle(-50.0);
        wheel.set_angle(-90.0);
        assert_eq!(wheel.selected_position(), 2);

        assert_eq!(*selected.borrow(), vec![1, 2]);
        assert_eq!(*angles.borrow(), vec![-45.0, -50.0, -90.0]);
    }

    #[test]
    fn test_selecting_empty_position_is_silent() {
        let mut wheel = wheel(8);
        let selected = Rc::new(RefCell::new(Vec::new()));
        let s = selected.clone();
        wheel.set_on_item_selected(move |position| s.borrow_mut().push(position));

        wheel.set_angle(90.0);
        assert_eq!(wheel.selected_position(), -2);
        assert!(wheel.is_empty_position(wheel.selected_position()));
        assert!(selected.borrow().is_empty());

        wheel.set_repeatable(true);
        assert_eq!(wheel.selected_position(), 6);
    }

    #[test]
    fn test_set_selected_and_mid() {
        let mut wheel = wheel(7);
        wheel.set_selected(3);
        assert_eq!(wheel.angle(), -135.0);
        assert_eq!(wheel.raw_selected_position(), 3);

        wheel.set_angle(0.0);
        wheel.set_mid_selected().unwrap();
        assert_eq!(wheel.selected_position(), 3);
    }

    #[test]
    fn test_mid_selected_without_adapter() {
        let config = WheelConfig::default();
        let mut wheel = Wheel::<Names>::new(config).unwrap();
        assert!(matches!(wheel.set_mid_selected(), Err(WheelError::NoAdapter)));

        wheel.set_adapter(names(0));
        assert!(matches!(wheel.set_mid_selected(), Err(WheelError::NoAdapter)));
    }

    #[test]
    fn test_invalid_setters_keep_state() {
        let mut wheel = wheel(8);
        assert!(matches!(wheel.set_item_count(0), Err(WheelError::InvalidItemCount(0))));
        assert!(matches!(
            wheel.set_item_count(u32::MAX),
            Err(WheelError::InvalidItemCount(u32::MAX))
        ));
        assert!(matches!(wheel.set_item_angle(1.0e-9), Err(WheelError::InvalidItemAngle(_))));
        assert_eq!(wheel.item_slots().len(), 8);
        assert!(wheel.set_item_angle(-10.0).is_err());
        assert!(wheel.set_wheel_radius(Dimension::Fixed(-1.0)).is_err());
        assert_eq!(wheel.item_count(), 8);
        assert_eq!(wheel.item_angle(), 45.0);
        assert_eq!(wheel.wheel_bounds().unwrap().radius, 200.0);
    }

    #[test]
    fn test_setters_relayout() {
        let mut wheel = wheel(8);
        wheel.set_item_count(12).unwrap();
        assert_eq!(wheel.item_slots().len(), 12);
        assert_eq!(wheel.item_angle(), 30.0);

        wheel.set_item_angle(60.0).unwrap();
        assert_eq!(wheel.item_count(), 6);
        assert_eq!(wheel.item_slots().len(), 6);

        wheel.set_selection_angle(270.0).unwrap();
        assert_eq!(wheel.selection_angle(), -90.0);
        let bounds = wheel.wheel_bounds().unwrap();
        let slot_angle = bounds.angle_to_degrees(wheel.item_slots()[0].center);
        assert!((slot_angle + 90.0).abs() < 1e-3);

        wheel.set_wheel_radius(Dimension::Fixed(120.0)).unwrap();
        assert_eq!(wheel.wheel_bounds().unwrap().radius, 120.0);
        assert_eq!(wheel.geometry().unwrap().wheel_to_item_distance, 100.0);
    }

    #[test]
    fn test_zero_layout_keeps_geometry() {
        let mut wheel = wheel(8);
        let before = wheel.geometry().cloned();
        wheel.layout(0.0, 0.0);
        assert_eq!(wheel.geometry().cloned(), before);
    }

    #[test]
    fn test_touch_before_layout_is_ignored() {
        let config = WheelConfig::default();
        let mut wheel = Wheel::with_adapter(config, names(8)).unwrap();
        wheel.on_pointer_down(Vec2::new(10.0, 10.0), 0);
        assert!(!wheel.is_dragging());
    }

    #[test]
    fn test_drag_rotates_wheel() {
        let mut wheel = wheel(8);
        wheel.on_pointer_down(at(&wheel, 0.0, 0.99), 0);
        assert!(wheel.is_dragging());
        wheel.on_pointer_move(at(&wheel, -20.0, 0.99), 16);
        assert!((wheel.angle() - 20.0 * TOUCH_FACTORS[19]).abs() < 0.01);
    }

    #[test]
    fn test_pointer_down_cancels_fling() {
        let mut wheel = wheel(8);
        wheel.on_pointer_down(at(&wheel, 0.0, 0.95), 0);
        wheel.on_pointer_move(at(&wheel, -20.0, 0.95), 10);
        wheel.on_pointer_move(at(&wheel, -40.0, 0.95), 20);
        wheel.on_pointer_up(at(&wheel, -40.0, 0.95), 20);
        assert!(wheel.angular_velocity() > 0.0);
        assert!(wheel.needs_tick());

        wheel.on_pointer_down(at(&wheel, 10.0, 0.5), 40);
        assert_eq!(wheel.angular_velocity(), 0.0);
        assert!(!wheel.needs_tick());
    }

    #[test]
    fn test_leaving_wheel_flings() {
        let mut wheel = wheel(8);
        wheel.on_pointer_down(at(&wheel, 0.0, 0.95), 0);
        wheel.on_pointer_move(at(&wheel, -20.0, 0.95), 10);
        wheel.on_pointer_move(Vec2::new(-50.0, -50.0), 20);
        assert!(!wheel.is_dragging());
        assert!(wheel.needs_tick());
    }

    #[test]
    fn test_tap_on_item_clicks() {
        let mut wheel = wheel(8);
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let c = clicks.clone();
        wheel.set_on_item_click(move |position, selected| c.borrow_mut().push((position, selected)));

        // Item states come from the frame pass
        wheel.frame().unwrap();
        let selected_item = wheel.item_state(0).unwrap().bounds.center;
        wheel.on_pointer_down(selected_item, 0);
        wheel.on_pointer_up(selected_item, 50);

        let neighbour = wheel.item_state(1).unwrap().bounds.center;
        wheel.on_pointer_down(neighbour, 100);
        wheel.on_pointer_up(neighbour, 150);

        assert_eq!(*clicks.borrow(), vec![(0, true), (1, false)]);
    }

    #[test]
    fn test_drag_is_not_a_click() {
        let mut wheel = wheel(8);
        let clicks = Rc::new(RefCell::new(0));
        let c = clicks.clone();
        wheel.set_on_item_click(move |_, _| *c.borrow_mut() += 1);
        wheel.set_click_max_dragged_angle(CLICK_MAX_DRAGGED_ANGLE);

        wheel.frame().unwrap();
        let item = wheel.item_state(0).unwrap().bounds.center;
        wheel.on_pointer_down(item, 0);
        // Small wobble back and forth: net zero, total above the threshold
        let wheel_bounds = wheel.wheel_bounds().unwrap();
        let angle = wheel_bounds.angle_to_degrees(item);
        let distance = wheel_bounds.center.distance(item) / wheel_bounds.radius;
        wheel.on_pointer_move(at(&wheel, angle - 1.0, distance), 10);
        wheel.on_pointer_move(at(&wheel, angle, distance), 20);
        wheel.on_pointer_up(at(&wheel, angle, distance), 30);

        assert_eq!(*clicks.borrow(), 0);
    }

    #[test]
    fn test_item_content_is_cached() {
        let mut wheel = wheel(8);
        assert!(wheel.cached_content(3).is_none());
        assert_eq!(wheel.item_content(3).map(String::as_str), Some("D"));
        assert_eq!(wheel.cached_content(3).map(String::as_str), Some("D"));
        assert!(!wheel.cache_state(3).dirty);

        wheel.invalidate(3);
        assert!(wheel.cache_state(3).dirty);
        // Empty positions are ignored
        wheel.invalidate(-1);
        assert!(wheel.item_content(-1).is_none());
    }
}
