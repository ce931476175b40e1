//! # chatrs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by conversation persistence:
//! - **`ensure_dir_exists`**: creates a directory (and parents) unless it already exists.
//! - **`read_file_if_exists`**: reads a file to a string, mapping "not found" to `Ok(None)`
//!   so a first run without a state file is not an error.
//! - **`write_string_to_file`**: writes a string, creating the parent directory first and
//!   overwriting any existing file.
//!
//! Every I/O error is wrapped with the path it concerns.
//!
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// it fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(ChatError::Config(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file, or `None` when there is no such file.
///
/// # Errors
///
/// Any failure other than `NotFound` (permissions, invalid UTF-8, the path
/// being a directory, ...) is returned with context.
pub fn read_file_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No file at {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // A bare file name has an empty parent, which is the working directory.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Test `ensure_dir_exists` when the directory needs to be created, including parents.
    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    /// Test `ensure_dir_exists` when the target path exists but is a file.
    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    /// Writing into a missing directory creates it, and reading returns the content.
    #[test]
    fn test_write_then_read() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/state.json");
        write_string_to_file(&file_path, "{}")?;
        assert_eq!(read_file_if_exists(&file_path)?, Some("{}".to_string()));
        Ok(())
    }

    #[test]
    fn test_write_overwrites() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("state.json");
        write_string_to_file(&file_path, "first version")?;
        write_string_to_file(&file_path, "second")?;
        assert_eq!(read_file_if_exists(&file_path)?.as_deref(), Some("second"));
        Ok(())
    }

    #[test]
    fn test_read_missing_file_is_none() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nonexistent.json");
        assert_eq!(read_file_if_exists(&file_path)?, None);
        Ok(())
    }

    #[test]
    fn test_read_directory_is_error() -> Result<()> {
        let base_dir = tempdir()?;
        assert!(read_file_if_exists(base_dir.path()).is_err());
        Ok(())
    }
}
