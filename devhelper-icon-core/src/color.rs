//! Fixed icon colors as straight (non-premultiplied) RGBA.

/// One RGBA pixel, 8 bits per channel.
pub type Rgba = [u8; 4];

/// Indigo-500, the rounded-square background.
pub const BACKGROUND: Rgba = [99, 102, 241, 255];

/// White, used for the `< / >` strokes.
pub const GLYPH: Rgba = [255, 255, 255, 255];

/// Emerald-400, the cursor dot.
pub const ACCENT: Rgba = [52, 211, 153, 255];

/// Fully transparent clear color.
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];
