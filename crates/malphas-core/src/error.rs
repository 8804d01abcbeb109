//! Error types for archive operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for archive operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Archive error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Source file is missing or unreadable.
    #[error("cannot read source {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination file cannot be created or written.
    #[error("cannot write destination {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored code table and packed payload are inconsistent.
    #[error("corrupt archive: {message}")]
    CorruptArchive { message: String },

    /// Packed payload ended before the declared bit count was consumed.
    #[error("unexpected end of payload after {bits_read} bits")]
    UnexpectedEof { bits_read: u64 },

    /// A byte had no entry in the code table during encoding.
    #[error("byte 0x{byte:02x} missing from code table")]
    UnknownSymbol { byte: u8 },

    /// Unsupported input shape.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// I/O error from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupt archive error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Error::CorruptArchive {
            message: message.into(),
        }
    }

    /// Create a corrupt archive error with offset context.
    pub fn corrupt_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptArchive {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(bits_read: u64) -> Self {
        Error::UnexpectedEof { bits_read }
    }

    /// Get error category for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::SourceUnreadable { .. } => "source_unreadable",
            Error::DestinationUnwritable { .. } => "destination_unwritable",
            Error::CorruptArchive { .. } => "corrupt_archive",
            Error::UnexpectedEof { .. } => "unexpected_eof",
            Error::UnknownSymbol { .. } => "unknown_symbol",
            Error::Unsupported(_) => "unsupported",
            Error::Io(_) => "io_error",
        }
    }
}
