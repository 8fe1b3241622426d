// SPDX-License-Identifier: MPL-2.0
//! Export functionality for diagnostic reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::paths::AppDir;

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
    /// No directory is available to write into.
    NoDirectory,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
            Self::NoDirectory => write!(f, "no export directory available"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::NoDirectory => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

/// Generates a default filename for diagnostic reports.
///
/// Format: `iced_services_diagnostics_YYYYMMDD_HHMMSS.json`, in local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "iced_services_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` through a temporary file and a rename.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Returns the default directory for saving diagnostic reports: the
/// application data directory, else the user's Documents folder.
#[must_use]
pub fn default_export_directory() -> Option<PathBuf> {
    AppDir::Data.resolve().or_else(dirs::document_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filename_has_expected_shape() {
        let name = generate_default_filename();
        assert!(name.starts_with("iced_services_diagnostics_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn write_atomic_creates_file_and_removes_temp() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("report.json");

        write_atomic(&path, "{}").expect("write should succeed");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "{}");
        assert!(!dir.path().join("nested").join("report.json.tmp").exists());
    }

    #[test]
    fn export_error_displays_cause() {
        let err = ExportError::from(io::Error::other("disk full"));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
