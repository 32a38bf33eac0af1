use std::path::{Path, PathBuf};

use crate::foundation::core::Resolution;

/// Convenience result type used across facerig.
pub type FaceResult<T> = Result<T, FaceError>;

/// Boxed lower-level cause attached to [`FaceError::ResourceLoad`].
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    /// A required sprite file is missing or could not be decoded.
    #[error("resource load error: '{}': {source}", path.display())]
    ResourceLoad {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying IO or decode failure.
        #[source]
        source: BoxedSource,
    },

    /// A layer does not match the working resolution it is composited at.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Working resolution of the composite.
        expected: Resolution,
        /// Size of the offending layer.
        actual: Resolution,
    },

    /// An animation name outside the known set was requested.
    #[error("unknown animation state: '{0}'")]
    UnknownState(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FaceError {
    /// Build a [`FaceError::ResourceLoad`] value.
    pub fn resource_load(path: impl AsRef<Path>, source: impl Into<BoxedSource>) -> Self {
        Self::ResourceLoad {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Build a [`FaceError::DimensionMismatch`] value.
    pub fn dimension_mismatch(expected: Resolution, actual: Resolution) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Build a [`FaceError::UnknownState`] value.
    pub fn unknown_state(name: impl Into<String>) -> Self {
        Self::UnknownState(name.into())
    }

    /// Build a [`FaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
