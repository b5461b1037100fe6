/// Drag-and-drop handling for the window and its slots
///
/// The window reports one event per dropped file. Files arriving within
/// `DROP_SETTLE` of the first one are gathered into a single batch, which
/// then goes to the slot under the cursor or, failing that, to the whole page.
use std::path::PathBuf;
use std::time::Duration;

use crate::state::data::ImageFile;

/// How long to wait for the rest of a multi-file drop
pub const DROP_SETTLE: Duration = Duration::from_millis(40);

/// Where a settled drop should land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped on a slot
    Slot(usize),
    /// Dropped anywhere else in the window
    Page,
}

/// Image files from one drop gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DropBatch {
    pub target: DropTarget,
    pub files: Vec<ImageFile>,
}

/// Tracks hover state and collects dropped files
#[derive(Debug, Default)]
pub struct DragDropZone {
    /// Slot currently under the cursor
    hovered_slot: Option<usize>,
    /// Files are being dragged over the window
    dragging: bool,
    /// A drop gesture is collecting files
    settling: bool,
    pending: Vec<ImageFile>,
}

impl DragDropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_slot(&mut self, index: usize) {
        self.hovered_slot = Some(index);
    }

    /// Leaving a slot only clears the hover if no other slot was entered since
    pub fn leave_slot(&mut self, index: usize) {
        if self.hovered_slot == Some(index) {
            self.hovered_slot = None;
        }
    }

    pub fn drag_entered(&mut self) {
        if !self.dragging {
            log::debug!("🫳 Files dragged over window");
        }
        self.dragging = true;
    }

    pub fn drag_left(&mut self) {
        self.dragging = false;
    }

    /// Slot to highlight while files are dragged over it
    pub fn highlighted(&self) -> Option<usize> {
        self.hovered_slot.filter(|_| self.dragging)
    }

    /// Record one dropped path.
    ///
    /// Non-image paths are dropped here. Returns true when this path opens
    /// a new drop gesture, in which case the caller must call `settle`
    /// after `DROP_SETTLE`.
    pub fn file_dropped(&mut self, path: PathBuf) -> bool {
        match ImageFile::from_path(&path) {
            Some(file) => self.pending.push(file),
            None => log::debug!("🚫 Ignoring non-image drop: {}", path.display()),
        }

        let opened = !self.settling;
        self.settling = true;
        opened
    }

    /// Close the current drop gesture and hand over its image files
    pub fn settle(&mut self) -> Option<DropBatch> {
        self.settling = false;
        self.dragging = false;

        if self.pending.is_empty() {
            return None;
        }

        let target = match self.hovered_slot {
            Some(index) => DropTarget::Slot(index),
            None => DropTarget::Page,
        };
        log::debug!("📦 Drop settled: {} files on {:?}", self.pending.len(), target);

        Some(DropBatch {
            target,
            files: std::mem::take(&mut self.pending),
        })
    }
}

/// Resolves after the settle window
pub async fn settle_delay() {
    tokio::time::sleep(DROP_SETTLE).await;
}
