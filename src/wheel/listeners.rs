//! Event callbacks
//!
//! One optional subscriber per event. Callbacks run synchronously from
//! inside gesture, tick and frame handling.

type AngleListener = Box<dyn FnMut(f32)>;
type SelectListener = Box<dyn FnMut(i32)>;
type PositionFlagListener = Box<dyn FnMut(i32, bool)>;

#[derive(Default)]
pub struct Listeners {
    angle_change: Option<AngleListener>,
    item_selected: Option<SelectListener>,
    item_click: Option<PositionFlagListener>,
    visibility_change: Option<PositionFlagListener>,
}

impl Listeners {
    pub fn set_angle_change(&mut self, listener: impl FnMut(f32) + 'static) {
        self.angle_change = Some(Box::new(listener));
    }

    pub fn set_item_selected(&mut self, listener: impl FnMut(i32) + 'static) {
        self.item_selected = Some(Box::new(listener));
    }

    pub fn set_item_click(&mut self, listener: impl FnMut(i32, bool) + 'static) {
        self.item_click = Some(Box::new(listener));
    }

    pub fn set_visibility_change(&mut self, listener: impl FnMut(i32, bool) + 'static) {
        self.visibility_change = Some(Box::new(listener));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn angle_changed(&mut self, angle: f32) {
        if let Some(listener) = self.angle_change.as_mut() {
            listener(angle);
        }
    }

    pub(crate) fn item_selected(&mut self, position: i32) {
        if let Some(listener) = self.item_selected.as_mut() {
            listener(position);
        }
    }

    pub(crate) fn item_clicked(&mut self, position: i32, is_selected: bool) {
        if let Some(listener) = self.item_click.as_mut() {
            listener(position, is_selected);
        }
    }

    pub(crate) fn visibility_changed(&mut self, position: i32, visible: bool) {
        if let Some(listener) = self.visibility_change.as_mut() {
            listener(position, visible);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("angle_change", &self.angle_change.is_some())
            .field("item_selected", &self.item_selected.is_some())
            .field("item_click", &self.item_click.is_some())
            .field("visibility_change", &self.visibility_change.is_some())
            .finish()
    }
}
