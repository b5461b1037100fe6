/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The photo slots and their visible count (slots.rs)
/// - Slideshow style settings (style.rs)

pub mod data;
pub mod slots;
pub mod style;
