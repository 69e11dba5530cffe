//! CLI configuration: thin wrapper around `coordbackup_config` shared types.
//!
//! Re-exports the shared types and resolves the effective settings for one
//! invocation, letting `GlobalOpts` flags override config defaults.

use clap::ValueEnum;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::output;

// ── Re-exports from shared crate ────────────────────────────────────

pub use coordbackup_config::{Config, config_path, load_config, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Settings every command handler reads, resolved once per invocation.
#[derive(Debug)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    /// Application name stamped into new backups.
    pub source: String,
}

impl Settings {
    /// Resolve settings: CLI flag > env > config file > built-in default.
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Self {
        let output = global.output.clone().unwrap_or_else(|| {
            OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or_else(|_| {
                tracing::warn!(value = %cfg.defaults.output, "unknown output format in config, using table");
                OutputFormat::Table
            })
        });

        let color_mode = global.color.clone().unwrap_or_else(|| {
            ColorMode::from_str(&cfg.defaults.color, true).unwrap_or(ColorMode::Auto)
        });

        Self {
            output,
            color: output::should_color(&color_mode),
            quiet: global.quiet,
            source: cfg.defaults.source.clone(),
        }
    }
}

/// Path of the config file this invocation reads and writes.
pub fn active_config_path(global: &GlobalOpts) -> std::path::PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}
