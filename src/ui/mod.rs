/// User interface module
///
/// - grid.rs: the photo slot grid and the render signal it listens to
/// - drop_zone.rs: drag-and-drop gathering and targeting
/// - style_panel.rs: slideshow style controls

pub mod drop_zone;
pub mod grid;
pub mod style_panel;

use std::fmt;

/// Sidebar sections; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Images,
    Style,
}

impl Section {
    pub const ALL: [Section; 2] = [Self::Images, Self::Style];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Images => "Images",
            Self::Style => "Style",
        })
    }
}
