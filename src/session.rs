/// Editing session: owns the slots and the renderer
///
/// Every SlotStore mutation goes through here, on the UI thread.
/// Background reads only produce a `BatchOutcome`; it is committed
/// by `finish`, which also fires the one render for that batch.
use crate::allocator;
use crate::ingest::{BatchOutcome, Ingest, PendingBatch};
use crate::state::data::ImageFile;
use crate::state::slots::{SlotStore, MIN_SLOT_COUNT, SLOT_CAPACITY};
use crate::ui::grid::Renderer;

/// What a resolved batch did, for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub loaded: usize,
    pub failed: usize,
}

pub struct Session<R: Renderer> {
    store: SlotStore,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    /// Start with the default empty slots and draw them once
    pub fn new(renderer: R) -> Self {
        let mut session = Self {
            store: SlotStore::new(),
            renderer,
        };
        session.render();
        session
    }

    pub fn store(&self) -> &SlotStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn render(&mut self) {
        self.renderer.render_all(&self.store);
    }

    // ========== Count controls ==========

    /// Set the slot count (clamped to 1..=10) and redraw
    pub fn set_count(&mut self, n: i64) {
        self.store.set_count(n);
        log::debug!("🔢 Slot count: {}", self.store.count());
        self.render();
    }

    /// One more slot; no-op at the cap
    pub fn increment(&mut self) {
        if self.store.count() < SLOT_CAPACITY {
            self.set_count(self.store.count() as i64 + 1);
        }
    }

    /// One fewer slot; no-op at the minimum
    pub fn decrement(&mut self) {
        if self.store.count() > MIN_SLOT_COUNT {
            self.set_count(self.store.count() as i64 - 1);
        }
    }

    /// Apply a typed count. Non-numeric text changes nothing.
    ///
    /// Returns whether the text was accepted.
    pub fn set_count_from_text(&mut self, input: &str) -> bool {
        match input.trim().parse::<i64>() {
            Ok(n) => {
                self.set_count(n);
                true
            }
            Err(_) => {
                log::debug!("🔢 Ignoring count input {:?}", input);
                false
            }
        }
    }

    // ========== Allocation ==========

    /// Files dropped on, or picked for, slot `index`.
    ///
    /// Returns the reads to run when there are any. Otherwise the render
    /// (if one was due) has already happened.
    pub fn drop_at(&mut self, index: usize, files: Vec<ImageFile>) -> Option<PendingBatch> {
        let ingest = allocator::allocate_at(&mut self.store, index, files);
        self.start(ingest)
    }

    /// Files dropped anywhere outside a slot
    pub fn drop_anywhere(&mut self, files: Vec<ImageFile>) -> Option<PendingBatch> {
        let ingest = allocator::allocate_from_first_empty(&mut self.store, files);
        self.start(ingest)
    }

    fn start(&mut self, ingest: Ingest) -> Option<PendingBatch> {
        match ingest {
            Ingest::Ignored => None,
            Ingest::Ready => {
                self.render();
                None
            }
            Ingest::Reading(batch) => Some(batch),
        }
    }

    /// Commit a resolved batch and redraw once
    pub fn finish(&mut self, outcome: BatchOutcome) -> BatchSummary {
        let failed = outcome.failed;
        let loaded = outcome.commit(&mut self.store);
        self.render();

        log::info!("✅ Batch complete: {} loaded, {} failed", loaded, failed);
        BatchSummary { loaded, failed }
    }
}
