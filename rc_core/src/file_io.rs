//! # File I/O
//!
//! Reading JSON documents (section inputs, design settings) from disk.
//! Nothing is ever written back: every calculation starts from a fresh
//! input snapshot.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{CalcError, CalcResult};

/// Read and deserialize a JSON file.
///
/// # Errors
///
/// * `FileError` - The file could not be opened or read
/// * `SerializationError` - The contents are not valid JSON for `T`
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}
