//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Descriptor conversion, validation or resolution error.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] objproto_descriptor::DescriptorError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed generator option.
    #[error("invalid generator option '{option}': {reason}")]
    InvalidOption {
        /// Option text as given.
        option: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Requested file is not part of the descriptor pool.
    #[error("unknown file '{name}'")]
    UnknownFile {
        /// File name.
        name: String,
    },
}

impl CodegenError {
    /// Creates an invalid option error.
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
