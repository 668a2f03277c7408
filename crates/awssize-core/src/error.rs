//! Error types for the size scale.

use crate::Size;
use thiserror::Error;

/// Errors produced by parsing and ratio computation.
///
/// All variants are deterministic functions of the input. Nothing here is
/// retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// The suffix of the input matched no known size name.
    /// Carries the full input as given.
    #[error("unsupported size class: {0:?}")]
    UnsupportedSizeClass(String),

    /// `src` is strictly smaller than the ratio target.
    #[error("size {src} is smaller than target {dst}")]
    SizeTooSmall { src: Size, dst: Size },

    /// `src` is not a whole multiple of the ratio target.
    #[error("size {src} cannot be expressed as a non-fractional multiple of {dst}")]
    NonIntegerRatio { src: Size, dst: Size },
}

impl SizeError {
    /// Whether this error came from comparing two incompatible sizes,
    /// as opposed to failing to parse one.
    #[must_use]
    pub fn is_incompatible(&self) -> bool {
        matches!(
            self,
            Self::SizeTooSmall { .. } | Self::NonIntegerRatio { .. }
        )
    }
}

/// Result alias for size operations.
pub type SizeResult<T> = Result<T, SizeError>;
