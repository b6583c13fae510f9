//! Per-adapter-position content cache
//!
//! Content is fetched from the adapter at most once until invalidated.
//! Positions outside the adapter share one immutable empty entry.

use crate::adapter::WheelAdapter;

/// Cache flags for one adapter position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryState {
    /// Content must be (re)fetched before use
    pub dirty: bool,
    /// Item was on screen in the last frame
    pub visible: bool,
    /// Position holds no item
    pub empty: bool,
}

impl EntryState {
    pub const FRESH: Self = Self {
        dirty: true,
        visible: false,
        empty: false,
    };
}

/// Shared state for every position outside the adapter
pub static EMPTY_ENTRY: EntryState = EntryState {
    dirty: true,
    visible: false,
    empty: true,
};

#[derive(Debug, Clone)]
pub struct CacheEntry<C> {
    pub state: EntryState,
    content: Option<C>,
}

impl<C> CacheEntry<C> {
    fn new() -> Self {
        Self {
            state: EntryState::FRESH,
            content: None,
        }
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct ItemCache<C> {
    entries: Vec<CacheEntry<C>>,
}

impl<C> Default for ItemCache<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> ItemCache<C> {
    /// One dirty entry per adapter position
    pub fn new(count: usize) -> Self {
        Self {
            entries: (0..count).map(|_| CacheEntry::new()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index(&self, position: i32) -> Option<usize> {
        usize::try_from(position)
            .ok()
            .filter(|&index| index < self.entries.len())
    }

    pub fn state(&self, position: i32) -> &EntryState {
        match self.index(position) {
            Some(index) => &self.entries[index].state,
            None => &EMPTY_ENTRY,
        }
    }

    pub fn entry(&self, position: i32) -> Option<&CacheEntry<C>> {
        self.index(position).map(|index| &self.entries[index])
    }

    /// Cached content without fetching
    pub fn content(&self, position: i32) -> Option<&C> {
        self.entry(position).and_then(CacheEntry::content)
    }

    /// Content for `position`, fetching from `adapter` only when dirty
    pub fn fetch<A>(&mut self, position: i32, adapter: &mut A) -> Option<&C>
    where
        A: WheelAdapter<Content = C>,
    {
        let index = self.index(position)?;
        let entry = &mut self.entries[index];
        if entry.state.dirty {
            log::trace!("Fetching content for position {}", position);
            entry.content = Some(adapter.content(index));
            entry.state.dirty = false;
        }
        entry.content.as_ref()
    }

    /// Mark one position for refetch; false if it has no entry
    pub fn invalidate(&mut self, position: i32) -> bool {
        match self.index(position) {
            Some(index) => {
                self.entries[index].state.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn invalidate_all(&mut self) {
        for entry in &mut self.entries {
            entry.state.dirty = true;
        }
    }

    /// Update the visible flag, returning true only on a change
    pub fn set_visible(&mut self, position: i32, visible: bool) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };
        let state = &mut self.entries[index].state;
        if state.visible == visible {
            return false;
        }
        state.visible = visible;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        count: usize,
        fetches: Vec<usize>,
    }

    impl WheelAdapter for Counting {
        type Content = String;

        fn count(&self) -> usize {
            self.count
        }

        fn content(&mut self, position: usize) -> String {
            self.fetches.push(position);
            format!("item {position}")
        }
    }

    #[test]
    fn test_fetch_once_until_invalidated() {
        let mut adapter = Counting {
            count: 4,
            fetches: Vec::new(),
        };
        let mut cache = ItemCache::new(adapter.count());

        assert!(cache.state(2).dirty);
        assert_eq!(cache.fetch(2, &mut adapter).map(String::as_str), Some("item 2"));
        assert_eq!(cache.fetch(2, &mut adapter).map(String::as_str), Some("item 2"));
        assert_eq!(adapter.fetches, vec![2]);
        assert!(!cache.state(2).dirty);

        assert!(cache.invalidate(2));
        cache.fetch(2, &mut adapter);
        assert_eq!(adapter.fetches, vec![2, 2]);

        cache.fetch(1, &mut adapter);
        cache.invalidate_all();
        cache.fetch(1, &mut adapter);
        assert_eq!(adapter.fetches, vec![2, 2, 1, 1]);
    }

    #[test]
    fn test_out_of_range_is_shared_empty_entry() {
        let mut adapter = Counting {
            count: 2,
            fetches: Vec::new(),
        };
        let mut cache = ItemCache::new(2);
        assert!(std::ptr::eq(cache.state(-1), &EMPTY_ENTRY));
        assert!(std::ptr::eq(cache.state(2), &EMPTY_ENTRY));
        assert!(cache.state(-1).empty);
        assert!(cache.fetch(5, &mut adapter).is_none());
        assert!(!cache.invalidate(-3));
        assert!(!cache.set_visible(9, true));
        assert!(adapter.fetches.is_empty());
    }

    #[test]
    fn test_visibility_edges() {
        let mut cache: ItemCache<String> = ItemCache::new(3);
        assert!(cache.set_visible(0, true));
        assert!(!cache.set_visible(0, true));
        assert!(cache.state(0).visible);
        assert!(cache.set_visible(0, false));
        assert!(!cache.set_visible(0, false));
    }
}
