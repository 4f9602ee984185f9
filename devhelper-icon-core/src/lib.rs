pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod size_table;

// Re-export primary types for convenience.
pub use color::{Rgba, ACCENT, BACKGROUND, GLYPH, TRANSPARENT};
pub use error::CoreError;
pub use geometry::{PixelRect, Point, Segment};
pub use layout::{AccentDot, IconLayout, ACCENT_MIN_SIZE};
pub use size_table::{iconset_file_name, SizeEntry, SizeTable, ICONSET_LOGICAL_SIZES, ICO_SIZES};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
