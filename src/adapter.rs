//! Content providers for wheel items
//!
//! The wheel never owns item content directly. It asks an adapter for the
//! number of items and, lazily, for the content of each visible position.

/// Supplies content for adapter positions `0..count()`
///
/// `count()` must stay the same until the adapter is handed to the wheel
/// again with `Wheel::set_adapter`.
pub trait WheelAdapter {
    /// Opaque visual payload drawn for an item
    type Content;

    fn count(&self) -> usize;

    /// Produce the content for `position` (always `< count()`)
    fn content(&mut self, position: usize) -> Self::Content;
}

/// Adapter over a list of items and a function turning an item into content
pub struct ArrayAdapter<T, F> {
    items: Vec<T>,
    to_content: F,
}

impl<T, C, F> ArrayAdapter<T, F>
where
    F: FnMut(usize, &T) -> C,
{
    pub fn new(items: Vec<T>, to_content: F) -> Self {
        Self { items, to_content }
    }

    pub fn item(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T, C, F> WheelAdapter for ArrayAdapter<T, F>
where
    F: FnMut(usize, &T) -> C,
{
    type Content = C;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn content(&mut self, position: usize) -> C {
        (self.to_content)(position, &self.items[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_adapter() {
        let mut adapter = ArrayAdapter::new(vec!["red", "green", "blue"], |i, name: &&str| {
            format!("{i}:{name}")
        });
        assert_eq!(adapter.count(), 3);
        assert_eq!(adapter.item(1), Some(&"green"));
        assert_eq!(adapter.item(3), None);
        assert_eq!(adapter.content(2), "2:blue");
    }
}
