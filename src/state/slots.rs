use super::data::ImageData;

/// Hard cap on the number of photo slots
pub const SLOT_CAPACITY: usize = 10;
/// A collage always shows at least one slot
pub const MIN_SLOT_COUNT: usize = 1;
/// Slot count on startup
pub const DEFAULT_SLOT_COUNT: usize = 5;

/// The SlotStore holds the photo slots of the collage.
///
/// Storage is a fixed array of `SLOT_CAPACITY` entries with a separate
/// visible `count`. Shrinking the count only hides slots: their images stay
/// in storage and show up again when the count grows back.
#[derive(Debug, Clone)]
pub struct SlotStore {
    count: usize,
    slots: [Option<ImageData>; SLOT_CAPACITY],
}

impl Default for SlotStore {
    fn default() -> Self {
        Self {
            count: DEFAULT_SLOT_COUNT,
            slots: Default::default(),
        }
    }
}

impl SlotStore {
    /// Create a store with `DEFAULT_SLOT_COUNT` empty slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visible slots (always within 1..=10)
    pub fn count(&self) -> usize {
        self.count
    }

    /// Replace the visible slot count, clamped to `[1, 10]`.
    ///
    /// Slot contents are left untouched. Callers trigger the redraw.
    pub fn set_count(&mut self, n: i64) {
        self.count = n.clamp(MIN_SLOT_COUNT as i64, SLOT_CAPACITY as i64) as usize;
    }

    /// True if nothing is stored at `index`
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Image stored at `index`, visible or not
    pub fn get(&self, index: usize) -> Option<&ImageData> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Store `data` at `index` regardless of the visible count.
    ///
    /// Returns false (and stores nothing) past the hard cap.
    pub fn set(&mut self, index: usize, data: ImageData) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(data);
                true
            }
            None => false,
        }
    }

    /// Lowest visible index with no image, or `count` when every visible slot is filled
    pub fn first_empty_index(&self) -> usize {
        (0..self.count)
            .find(|&index| self.is_empty(index))
            .unwrap_or(self.count)
    }

    /// The visible window of slots, in order
    pub fn visible(&self) -> impl Iterator<Item = Option<&ImageData>> {
        self.slots[..self.count].iter().map(Option::as_ref)
    }

    /// Number of visible slots holding an image
    pub fn filled_count(&self) -> usize {
        self.visible().filter(Option::is_some).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(name: &str) -> ImageData {
        ImageData::from_rgba(name, 1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn test_new_store_has_five_empty_slots() {
        let store = SlotStore::new();
        assert_eq!(store.count(), 5);
        assert!((0..SLOT_CAPACITY).all(|i| store.is_empty(i)));
        assert_eq!(store.first_empty_index(), 0);
    }

    #[test]
    fn test_set_count_clamps() {
        let mut store = SlotStore::new();
        for (input, expected) in [(-3, 1), (0, 1), (1, 1), (7, 7), (10, 10), (11, 10), (i64::MAX, 10)] {
            store.set_count(input);
            assert_eq!(store.count(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_first_empty_skips_filled_slots() {
        let mut store = SlotStore::new();
        store.set(0, photo("a"));
        store.set(2, photo("c"));
        assert_eq!(store.first_empty_index(), 1);
    }

    #[test]
    fn test_first_empty_is_count_when_full() {
        let mut store = SlotStore::new();
        store.set_count(3);
        for i in 0..3 {
            store.set(i, photo("x"));
        }
        assert_eq!(store.first_empty_index(), 3);
    }

    #[test]
    fn test_first_empty_ignores_hidden_slots() {
        let mut store = SlotStore::new();
        store.set_count(2);
        store.set(0, photo("a"));
        store.set(1, photo("b"));
        // Slot 2 is empty but hidden
        assert_eq!(store.first_empty_index(), 2);
        store.set(2, photo("c"));
        assert_eq!(store.first_empty_index(), 2);
    }

    #[test]
    fn test_set_past_capacity_is_rejected() {
        let mut store = SlotStore::new();
        assert!(store.set(9, photo("last")));
        assert!(!store.set(10, photo("overflow")));
        assert_eq!(store.get(9).map(|d| d.name.as_str()), Some("last"));
    }

    #[test]
    fn test_set_ahead_of_count() {
        let mut store = SlotStore::new();
        store.set(7, photo("ahead"));
        assert_eq!(store.count(), 5);
        assert_eq!(store.filled_count(), 0);
        store.set_count(8);
        assert_eq!(store.filled_count(), 1);
    }

    #[test]
    fn test_shrink_then_grow_reveals_old_image() {
        let mut store = SlotStore::new();
        store.set(4, photo("kept"));
        store.set_count(2);
        assert_eq!(store.visible().count(), 2);
        assert_eq!(store.filled_count(), 0);

        store.set_count(5);
        let revealed = store.visible().nth(4).flatten().map(|d| d.name.clone());
        assert_eq!(revealed.as_deref(), Some("kept"));
    }

    #[test]
    fn test_overwrite_keeps_last_write() {
        let mut store = SlotStore::new();
        store.set(1, photo("first"));
        store.set(1, photo("second"));
        assert_eq!(store.get(1).map(|d| d.name.as_str()), Some("second"));
    }
}
