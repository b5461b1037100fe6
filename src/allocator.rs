/// Slot allocation policy
///
/// Decides where a batch of files lands. Drops and dialog picks on a
/// slot target that slot; drops anywhere else start at the lowest empty
/// slot, whatever the drop position was.
use crate::ingest::batch::{self, Ingest};
use crate::state::data::ImageFile;
use crate::state::slots::SlotStore;

/// Place `files` starting at slot `index`
pub fn allocate_at(store: &mut SlotStore, index: usize, mut files: Vec<ImageFile>) -> Ingest {
    match files.len() {
        0 => Ingest::Ignored,
        1 => match files.pop() {
            Some(file) => batch::load_single(file, index),
            None => Ingest::Ignored,
        },
        _ => batch::load_batch(store, files, index),
    }
}

/// Place `files` starting at the first empty visible slot
pub fn allocate_from_first_empty(store: &mut SlotStore, files: Vec<ImageFile>) -> Ingest {
    let index = store.first_empty_index();
    allocate_at(store, index, files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::decoder::tests::png_fixture;
    use crate::state::data::ImageData;

    fn photos(n: usize) -> Vec<ImageFile> {
        (0..n).map(|i| png_fixture(&format!("drop{}.png", i))).collect()
    }

    fn targets(ingest: Ingest) -> Vec<usize> {
        match ingest {
            Ingest::Reading(batch) => batch.target_indices(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_no_files_is_ignored() {
        let mut store = SlotStore::new();
        assert!(matches!(allocate_at(&mut store, 0, Vec::new()), Ingest::Ignored));
        assert!(matches!(
            allocate_from_first_empty(&mut store, Vec::new()),
            Ingest::Ignored
        ));
    }

    #[test]
    fn test_global_drop_fills_from_zero() {
        let mut store = SlotStore::new();
        assert_eq!(targets(allocate_from_first_empty(&mut store, photos(3))), vec![0, 1, 2]);
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn test_global_drop_larger_than_count_expands() {
        let mut store = SlotStore::new();
        assert_eq!(
            targets(allocate_from_first_empty(&mut store, photos(7))),
            (0..7).collect::<Vec<_>>()
        );
        assert_eq!(store.count(), 7);
    }

    #[test]
    fn test_global_drop_caps_at_ten() {
        let mut store = SlotStore::new();
        assert_eq!(
            targets(allocate_from_first_empty(&mut store, photos(12))),
            (0..10).collect::<Vec<_>>()
        );
        assert_eq!(store.count(), 10);
    }

    #[test]
    fn test_global_drop_starts_at_first_gap() {
        let mut store = SlotStore::new();
        store.set(0, ImageData::from_rgba("a", 1, 1, vec![0; 4]));
        store.set(2, ImageData::from_rgba("c", 1, 1, vec![0; 4]));
        // Consecutive from the first gap, overwriting filled slots on the way
        assert_eq!(targets(allocate_from_first_empty(&mut store, photos(2))), vec![1, 2]);
    }

    #[test]
    fn test_slot_drop_uses_that_slot() {
        let mut store = SlotStore::new();
        assert_eq!(targets(allocate_at(&mut store, 3, photos(1))), vec![3]);
        assert_eq!(targets(allocate_at(&mut store, 3, photos(4))), vec![3, 4, 5, 6]);
        assert_eq!(store.count(), 7);
    }

    #[test]
    fn test_slot_drop_overflow() {
        let mut store = SlotStore::new();
        assert_eq!(targets(allocate_at(&mut store, 7, photos(5))), vec![7, 8, 9]);
    }
}
