//! PDF rendering and output checks

pub mod metadata;
pub mod render;

// Re-export commonly used items
pub use metadata::count_pages;
pub use render::{Renderer, WeasyPrint, DEFAULT_ENGINE};
