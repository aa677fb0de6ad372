//! Filesystem helpers
//!

use std::fs;
use std::path::Path;

use crate::error::IddiffError;

pub fn read_from_path(path: impl AsRef<Path>) -> Result<String, IddiffError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(_) => Err(IddiffError::file_not_found(path)),
    }
}

pub fn write_to_path(path: impl AsRef<Path>, value: &str) -> Result<(), IddiffError> {
    fs::write(path.as_ref(), value)?;
    Ok(())
}
