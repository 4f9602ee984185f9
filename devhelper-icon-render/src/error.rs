use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from rendering and encoding icons.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Core(#[from] devhelper_icon_core::CoreError),

    #[error("canvas buffer holds {len} bytes, expected {width}×{height}×4")]
    DimensionMismatch { width: u32, height: u32, len: usize },

    #[error("cannot build an icon container with no images")]
    EmptyIcon,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error("ICO encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl RenderError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
