//! Shared helpers for command handlers.

use std::path::Path;

use coordbackup_core::{Backup, SecurityLevel, hex};

use crate::error::CliError;

/// Read a backup file, attaching the path to any failure.
pub fn load_backup(path: &Path) -> Result<Backup, CliError> {
    Backup::read_file(path).map_err(|e| CliError::from_core_at(e, path))
}

/// Write a backup file, attaching the path to any failure.
pub fn store_backup(backup: &Backup, path: &Path) -> Result<(), CliError> {
    backup
        .write_file(path)
        .map_err(|e| CliError::from_core_at(e, path))
}

/// Parse a security level given by name or number.
pub fn parse_security_level(raw: &str) -> Result<SecurityLevel, CliError> {
    raw.parse::<SecurityLevel>().map_err(CliError::from)
}

/// Refuse to clobber an existing file unless `--force` was passed.
pub fn ensure_writable(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Check that a stored hex field decodes and fits in `width` bytes.
pub fn check_width(field: &'static str, stored: &str, width: usize) -> Result<(), CliError> {
    let bytes = hex::decode(field, stored)?;
    if bytes.len() > width {
        return Err(CliError::Validation {
            field: field.into(),
            reason: format!("longer than {width} bytes ({} given)", bytes.len()),
        });
    }
    Ok(())
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn security_level_by_name_or_number() {
        assert_eq!(parse_security_level("enc_mic32").unwrap(), SecurityLevel::EncMic32);
        assert_eq!(parse_security_level("0").unwrap(), SecurityLevel::None);
        assert!(matches!(
            parse_security_level("bogus"),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn width_check_rejects_overlong_and_non_hex() {
        assert!(check_width("pan_id", "1a62", 2).is_ok());
        assert!(matches!(
            check_width("pan_id", "01a62a", 2),
            Err(CliError::Validation { .. })
        ));
        assert!(matches!(
            check_width("pan_id", "zz", 2),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_backup(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), crate::error::exit_code::NOT_FOUND);
    }

    #[test]
    fn garbage_maps_to_invalid_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let err = load_backup(&path).unwrap_err();
        assert!(matches!(err, CliError::InvalidBackup { .. }));
        assert_eq!(err.exit_code(), crate::error::exit_code::DATA);
    }

    #[test]
    fn existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(ensure_writable(&path, false).is_err());
        assert!(ensure_writable(&path, true).is_ok());
        assert!(ensure_writable(&dir.path().join("new.json"), false).is_ok());
    }
}
