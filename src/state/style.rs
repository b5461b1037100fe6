/// Presentation settings for the slideshow
///
/// This struct stores the options picked in the Style panel.
/// It serializes to JSON so the whole configuration can be copied
/// out of the tool in one go.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transition speed bounds in milliseconds
pub const SPEED_RANGE_MS: (u32, u32) = (100, 3000);
/// Autoplay interval bounds in milliseconds
pub const INTERVAL_RANGE_MS: (u32, u32) = (1000, 10_000);

/// How one photo replaces the next
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Slide,
    Fade,
    Zoom,
    None,
}

impl Transition {
    pub const ALL: [Transition; 4] = [Self::Slide, Self::Fade, Self::Zoom, Self::None];
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Slide => "Slide",
            Self::Fade => "Fade",
            Self::Zoom => "Zoom",
            Self::None => "None",
        })
    }
}

/// What fills the area around a photo
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Black,
    White,
    Blur,
}

impl Background {
    pub const ALL: [Background; 3] = [Self::Black, Self::White, Self::Blur];
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Blur => "Blurred photo",
        })
    }
}

/// All style options of the slideshow
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    // ========== Motion ==========
    pub transition: Transition,

    /// Transition duration (100 to 3000 ms)
    pub speed_ms: u32,

    /// Advance automatically
    pub autoplay: bool,

    /// Time each photo stays on screen when autoplaying (1000 to 10000 ms)
    pub autoplay_interval_ms: u32,

    // ========== Look ==========
    pub background: Background,

    /// Show previous/next arrows
    pub show_arrows: bool,

    /// Show position dots under the slideshow
    pub show_dots: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            transition: Transition::Slide,
            speed_ms: 500,
            autoplay: true,
            autoplay_interval_ms: 3000,
            background: Background::Black,
            show_arrows: true,
            show_dots: true,
        }
    }
}

impl StyleConfig {
    /// Convert to a JSON string for the clipboard
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from a JSON string; missing keys fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.set_speed(config.speed_ms);
        config.set_autoplay_interval(config.autoplay_interval_ms);
        Ok(config)
    }

    pub fn set_speed(&mut self, ms: u32) {
        self.speed_ms = ms.clamp(SPEED_RANGE_MS.0, SPEED_RANGE_MS.1);
    }

    pub fn set_autoplay_interval(&mut self, ms: u32) {
        self.autoplay_interval_ms = ms.clamp(INTERVAL_RANGE_MS.0, INTERVAL_RANGE_MS.1);
    }

    /// Check if nothing was changed from the defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
