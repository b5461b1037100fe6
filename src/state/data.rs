/// Shared data structures for the application state
///
/// These structs represent the data that flows between
/// the drop/dialog layer, the decoders and the slot grid.
use iced::widget::image::Handle;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// A file the user selected or dropped, already known to be an image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    /// Filename only (e.g., "IMG_0001.jpg")
    pub name: String,
    /// Full path to the file on disk
    pub path: PathBuf,
    /// Media type guessed from the extension (always "image/...")
    pub mime: &'static str,
}

impl ImageFile {
    /// Classify a path as an image file.
    ///
    /// Returns `None` for anything whose media type is not `image/*`,
    /// so non-image payloads never reach the ingestor.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let mime = media_type(&path)?;
        if !mime.starts_with("image/") {
            return None;
        }

        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Some(Self { name, path, mime })
    }
}

/// Media type for a path, based on its extension
fn media_type(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// A decoded image ready to be displayed in a slot
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Name of the file it was decoded from
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// RGBA pixels uploaded to iced's image cache
    pub handle: Handle,
}

impl ImageData {
    /// Wrap raw RGBA8 pixels
    pub fn from_rgba(name: impl Into<String>, width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_are_accepted() {
        let file = ImageFile::from_path("/photos/beach.JPG").unwrap();
        assert_eq!(file.name, "beach.JPG");
        assert_eq!(file.mime, "image/jpeg");

        let file = ImageFile::from_path("/photos/sunset.png").unwrap();
        assert_eq!(file.mime, "image/png");
    }

    #[test]
    fn test_non_images_are_rejected() {
        assert!(ImageFile::from_path("/docs/notes.txt").is_none());
        assert!(ImageFile::from_path("/docs/README").is_none());
        assert!(ImageFile::from_path("/videos/clip.mp4").is_none());
    }
}
