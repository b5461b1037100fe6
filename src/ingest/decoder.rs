/// Image file decoder
///
/// Reads a picked or dropped file and decodes it into RGBA pixels
/// the slot grid can display.
use crate::state::data::{ImageData, ImageFile};
use thiserror::Error;
use tokio::task;

/// Why a file could not be turned into slot content
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("decode task failed: {0}")]
    Join(String),
}

/// Decode an image file into displayable pixels
///
/// The read is async; decoding runs on the blocking pool because it is CPU-intensive.
pub async fn decode_file(file: ImageFile) -> Result<ImageData, IngestError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| IngestError::Read {
            name: file.name.clone(),
            source,
        })?;

    task::spawn_blocking(move || decode_bytes(&file.name, &bytes))
        .await
        .map_err(|e| IngestError::Join(e.to_string()))?
}

/// Decode an in-memory encoded image (format sniffed from the content)
pub fn decode_bytes(name: &str, bytes: &[u8]) -> Result<ImageData, IngestError> {
    let img = image::load_from_memory(bytes).map_err(|source| IngestError::Decode {
        name: name.to_string(),
        source,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!("🖼️  Decoded {}: {}x{}", name, width, height);

    Ok(ImageData::from_rgba(name, width, height, rgba.into_raw()))
}
