//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use coordbackup_config::ConfigError;
use coordbackup_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const DATA: i32 = 65;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Files ────────────────────────────────────────────────────────
    #[error("Backup file not found: {}", .path.display())]
    #[diagnostic(
        code(coordbackup::not_found),
        help("Check the path, or create a backup with: coordbackup new <FILE> ...")
    )]
    FileNotFound { path: PathBuf },

    #[error("{} already exists", .path.display())]
    #[diagnostic(
        code(coordbackup::conflict),
        help("Use --force (-f) to overwrite it.")
    )]
    AlreadyExists { path: PathBuf },

    #[error("{} is not a valid backup document", .path.display())]
    #[diagnostic(
        code(coordbackup::invalid_backup),
        help("The file must contain a single JSON object in the open coordinator backup format.")
    )]
    InvalidBackup {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    #[error("{} is not in canonical layout", .path.display())]
    #[diagnostic(
        code(coordbackup::not_canonical),
        help("Rewrite it with: coordbackup fmt <FILE>")
    )]
    NotCanonical { path: PathBuf },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(coordbackup::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(coordbackup::config),
        help("Check the config file, or recreate it with: coordbackup config init --force")
    )]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Could not render output as {format}: {reason}")]
    #[diagnostic(
        code(coordbackup::render),
        help("Try another format with --output.")
    )]
    Render { format: &'static str, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Backup error: {0}")]
    #[diagnostic(code(coordbackup::core))]
    Core(CoreError),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => exit_code::NOT_FOUND,
            Self::AlreadyExists { .. } => exit_code::CONFLICT,
            Self::InvalidBackup { .. } => exit_code::DATA,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the file a core operation was working on.
    pub fn from_core_at(err: CoreError, path: &std::path::Path) -> Self {
        if err.is_not_found() {
            return Self::FileNotFound {
                path: path.to_path_buf(),
            };
        }
        match err {
            CoreError::File { source, .. } | CoreError::Io(source) => Self::Io(source),
            json @ CoreError::Json(_) => Self::InvalidBackup {
                path: path.to_path_buf(),
                source: json,
            },
            other => Self::from(other),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ShortInput {
                field,
                expected,
                actual,
            } => CliError::Validation {
                field: field.into(),
                reason: format!("needs {expected} bytes, got {actual}"),
            },

            CoreError::InvalidHex { field, value, .. } => CliError::Validation {
                field: field.into(),
                reason: format!("not valid hex: {value:?}"),
            },

            CoreError::UnknownSecurityLevel(level) => CliError::Validation {
                field: "security_level".into(),
                reason: format!("expected a name like ENC_MIC32 or a number 0-7, got '{level}'"),
            },

            CoreError::File { source, .. } | CoreError::Io(source) => CliError::Io(source),

            other @ CoreError::Json(_) => CliError::Core(other),
        }
    }
}
