//! File loading helpers with rich error information.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Safely read a file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(Error::file(format!("File not found (needed for {purpose})"), path));
    }

    if !path.is_file() {
        return Err(Error::file(format!("Path is not a file (expected for {purpose})"), path));
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => {
            Error::file("Permission denied - check file permissions", path)
        }
        io::ErrorKind::InvalidData => {
            Error::file("File contains invalid UTF-8 data - cannot read as text", path)
        }
        _ => Error::Io(e),
    })
}

/// Read and decode a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or does not decode as `T`
pub fn read_json_file<T: DeserializeOwned>(path: &Path, purpose: &str) -> Result<T> {
    let content = safe_read_to_string(path, purpose)?;
    let value = serde_json::from_str(&content)?;
    log::debug!("Decoded {purpose} from {}", path.display());
    Ok(value)
}
