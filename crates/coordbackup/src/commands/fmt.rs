//! `fmt`: rewrite a backup in canonical layout.
//!
//! Canonical layout is whatever the writer produces: four-space indent,
//! fixed field order, optional fields omitted when empty, trailing newline.

use std::path::Path;

use coordbackup_core::{Backup, CoreError};

use crate::cli::FmtArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: &FmtArgs, settings: &Settings) -> Result<(), CliError> {
    let path = args.file.as_path();
    let current = read_text(path)?;
    let backup = Backup::decode(&current).map_err(|e| CliError::from_core_at(e, path))?;
    let canonical = canonical_text(&backup)?;

    if current == canonical {
        output::print_status(
            &format!("{} is already canonical", path.display()),
            settings.quiet,
        );
        return Ok(());
    }

    if args.check {
        return Err(CliError::NotCanonical {
            path: path.to_path_buf(),
        });
    }

    util::store_backup(&backup, path)?;
    tracing::info!(path = %path.display(), "rewrote backup");
    output::print_status(&format!("Formatted {}", path.display()), settings.quiet);
    Ok(())
}

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| {
        CliError::from_core_at(
            CoreError::File {
                path: path.to_path_buf(),
                source,
            },
            path,
        )
    })
}

/// Exactly what `Backup::write_file` would put on disk.
fn canonical_text(backup: &Backup) -> Result<String, CliError> {
    let mut text = backup.encode()?;
    text.push('\n');
    Ok(text)
}
