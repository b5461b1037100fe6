/// Image ingestion module
///
/// This module handles:
/// - Decoding picked or dropped files into RGBA pixels (decoder.rs)
/// - Mapping a batch of files onto slots and joining their reads (batch.rs)

pub mod batch;
pub mod decoder;

pub use batch::{BatchOutcome, Ingest, PendingBatch};
