//! Reading the game files

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ReadError;

/// Reads a file as a list of lines, without line terminators
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    let text = read_to_string(path)?;
    Ok(text.lines().map(String::from).collect())
}

/// Reads a whole file
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    info!("Reading file: {}", path.display());
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            error!("File not found: {}", path.display());
            ReadError::NotFound(path.into())
        } else {
            ReadError::Io {
                path: path.into(),
                source,
            }
        }
    })
}
