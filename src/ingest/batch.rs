/// Batch ingestion of image files into slots
///
/// A batch assigns every file a fixed destination slot up front,
/// decodes all of them concurrently and reports back once, when the
/// last read has finished. Completion order does not matter since
/// no two files share a destination.
use super::decoder::{self, IngestError};
use crate::state::data::{ImageData, ImageFile};
use crate::state::slots::{SlotStore, SLOT_CAPACITY};
use tokio::task::JoinSet;

/// What the caller has to do after starting an ingestion
#[derive(Debug)]
pub enum Ingest {
    /// No files were accepted; nothing changed
    Ignored,
    /// Nothing to read but the store may have changed: render now
    Ready,
    /// Reads are in flight; render when the batch resolves
    Reading(PendingBatch),
}

/// Files waiting to be decoded, each bound to its destination slot
#[derive(Debug)]
pub struct PendingBatch {
    reads: Vec<(usize, ImageFile)>,
}

/// Result of a fully resolved batch
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Decoded images with their destination slot, in completion order
    pub loaded: Vec<(usize, ImageData)>,
    /// Reads that failed; their slots are left as they were
    pub failed: usize,
}

/// Load one file into `index`.
///
/// The visible count is not touched. An index past the hard cap has
/// nothing to read and resolves immediately.
pub fn load_single(file: ImageFile, index: usize) -> Ingest {
    if index >= SLOT_CAPACITY {
        log::warn!("⚠️  Slot {} does not exist, dropping {}", index, file.name);
        return Ingest::Ready;
    }

    log::info!("📥 Reading {} into slot {}", file.name, index);
    Ingest::Reading(PendingBatch {
        reads: vec![(index, file)],
    })
}

/// Load `files` into consecutive slots starting at `start`.
///
/// Grows the visible count to fit the batch (up to the hard cap) and
/// silently discards files whose destination would be past the cap.
pub fn load_batch(store: &mut SlotStore, files: Vec<ImageFile>, start: usize) -> Ingest {
    if files.is_empty() {
        return Ingest::Ignored;
    }

    let required = start + files.len();
    if required > store.count() {
        store.set_count(required.min(SLOT_CAPACITY) as i64);
        log::debug!("🔢 Slot count grown to {} for batch", store.count());
    }

    let total = files.len();
    let reads: Vec<(usize, ImageFile)> = files
        .into_iter()
        .enumerate()
        .map(|(offset, file)| (start + offset, file))
        .filter(|(index, _)| *index < SLOT_CAPACITY)
        .collect();

    let discarded = total - reads.len();
    if discarded > 0 {
        log::warn!(
            "⚠️  Discarding {} files past the {}-slot limit",
            discarded,
            SLOT_CAPACITY
        );
    }

    if reads.is_empty() {
        return Ingest::Ready;
    }

    log::info!(
        "📥 Reading {} files into slots {}..={}",
        reads.len(),
        start,
        start + reads.len() - 1
    );
    Ingest::Reading(PendingBatch { reads })
}

impl PendingBatch {
    /// Destination slots, in file order
    pub fn target_indices(&self) -> Vec<usize> {
        self.reads.iter().map(|(index, _)| *index).collect()
    }

    /// Number of reads in the batch
    pub fn len(&self) -> usize {
        self.reads.len()
    }

    /// Decode every file concurrently and resolve once all of them finished.
    ///
    /// Never touches the SlotStore: the owner commits the outcome.
    pub async fn read(self) -> BatchOutcome {
        let mut in_flight = JoinSet::new();
        for (index, file) in self.reads {
            in_flight.spawn(async move { (index, decoder::decode_file(file).await) });
        }

        let mut outcome = BatchOutcome::default();
        while let Some(joined) = in_flight.join_next().await {
            match joined {
                Ok((index, Ok(data))) => outcome.loaded.push((index, data)),
                Ok((index, Err(e))) => {
                    log::warn!("⚠️  Slot {} left unchanged: {}", index, e);
                    outcome.failed += 1;
                }
                Err(e) => {
                    log::warn!("⚠️  {}", IngestError::Join(e.to_string()));
                    outcome.failed += 1;
                }
            }
            log::debug!("⏳ {} reads remaining", in_flight.len());
        }

        outcome
    }
}

impl BatchOutcome {
    /// Write every decoded image into its slot. Returns the number written.
    pub fn commit(self, store: &mut SlotStore) -> usize {
        self.loaded
            .into_iter()
            .map(|(index, data)| store.set(index, data))
            .filter(|written| *written)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::decoder::tests::{corrupt_fixture, png_fixture};

    fn photos(n: usize) -> Vec<ImageFile> {
        (0..n).map(|i| png_fixture(&format!("photo{}.png", i))).collect()
    }

    fn expect_reading(ingest: Ingest) -> PendingBatch {
        match ingest {
            Ingest::Reading(batch) => batch,
            other => panic!("expected reads in flight, got {:?}", other),
        }
    }

    fn names(store: &SlotStore) -> Vec<Option<String>> {
        store.visible().map(|slot| slot.map(|d| d.name.clone())).collect()
    }

    #[test]
    fn test_empty_batch_is_ignored() {
        let mut store = SlotStore::new();
        assert!(matches!(load_batch(&mut store, Vec::new(), 0), Ingest::Ignored));
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn test_batch_grows_count() {
        let mut store = SlotStore::new();
        let batch = expect_reading(load_batch(&mut store, photos(8), 0));
        assert_eq!(store.count(), 8);
        assert_eq!(batch.target_indices(), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_batch_within_count_keeps_count() {
        let mut store = SlotStore::new();
        store.set_count(9);
        let batch = expect_reading(load_batch(&mut store, photos(3), 2));
        assert_eq!(store.count(), 9);
        assert_eq!(batch.target_indices(), vec![2, 3, 4]);
    }

    #[test]
    fn test_batch_discards_past_capacity() {
        let mut store = SlotStore::new();
        let batch = expect_reading(load_batch(&mut store, photos(5), 7));
        assert_eq!(store.count(), 10);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.target_indices(), vec![7, 8, 9]);
    }

    #[test]
    fn test_batch_entirely_past_capacity_is_ready() {
        let mut store = SlotStore::new();
        store.set_count(3);
        assert!(matches!(load_batch(&mut store, photos(2), 10), Ingest::Ready));
        // The count still expanded before the files were discarded
        assert_eq!(store.count(), 10);
    }

    #[test]
    fn test_single_does_not_grow_count() {
        let batch = expect_reading(load_single(png_fixture("one.png"), 3));
        assert_eq!(batch.target_indices(), vec![3]);
        assert!(matches!(load_single(png_fixture("two.png"), 10), Ingest::Ready));
    }

    #[tokio::test]
    async fn test_read_resolves_all_files() {
        let mut store = SlotStore::new();
        let batch = expect_reading(load_batch(&mut store, photos(8), 0));
        let outcome = batch.read().await;
        assert_eq!(outcome.loaded.len(), 8);
        assert_eq!(outcome.failed, 0);

        assert_eq!(outcome.commit(&mut store), 8);
        assert_eq!(store.filled_count(), 8);
        assert_eq!(store.first_empty_index(), 8);
    }

    #[tokio::test]
    async fn test_failed_read_still_completes_batch() {
        let mut store = SlotStore::new();
        let files = vec![
            png_fixture("good0.png"),
            corrupt_fixture("broken.png"),
            png_fixture("good2.png"),
        ];
        let outcome = expect_reading(load_batch(&mut store, files, 0)).read().await;
        assert_eq!(outcome.loaded.len(), 2);
        assert_eq!(outcome.failed, 1);

        outcome.commit(&mut store);
        assert!(!store.is_empty(0));
        assert!(store.is_empty(1));
        assert!(!store.is_empty(2));
    }

    #[test]
    fn test_commit_order_does_not_matter() {
        let image = |name: &str| ImageData::from_rgba(name, 1, 1, vec![0; 4]);
        let forward = BatchOutcome {
            loaded: vec![(0, image("a")), (1, image("b"))],
            failed: 0,
        };
        let reversed = BatchOutcome {
            loaded: vec![(1, image("b")), (0, image("a"))],
            failed: 0,
        };

        let mut first = SlotStore::new();
        let mut second = SlotStore::new();
        forward.commit(&mut first);
        reversed.commit(&mut second);
        assert_eq!(names(&first), names(&second));
    }
}
