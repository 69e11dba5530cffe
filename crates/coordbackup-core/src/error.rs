// ── Core error types ──
//
// Every fallible operation in the core crate surfaces one of these.
// Filesystem and JSON failures are carried through untouched; the
// remaining variants cover byte input that is too short for a fixed-width
// field and stored strings that are not valid hex.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Filesystem errors ────────────────────────────────────────────
    #[error("Cannot open {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ── Document errors ──────────────────────────────────────────────
    #[error("Invalid backup document: {0}")]
    Json(#[from] serde_json::Error),

    // ── Field errors ─────────────────────────────────────────────────
    #[error("{field} needs {expected} bytes, got {actual}")]
    ShortInput {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} is not valid hex: {value:?}")]
    InvalidHex {
        field: &'static str,
        value: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Unknown security level: {0}")]
    UnknownSecurityLevel(String),
}

impl CoreError {
    /// True when the error came from reading or writing a file or stream.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::File { .. } | Self::Io(_))
    }

    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::File { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
