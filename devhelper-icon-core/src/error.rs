use thiserror::Error;

/// Errors originating from icon layout computation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid icon size: {0} (must be > 0)")]
    InvalidSize(u32),
}
