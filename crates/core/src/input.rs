//! Reading digest sources from files and standard input.

use std::fs;
use std::path::Path;

use crate::{DigestError, Result};

/// Reads a generated digest from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    if !path.exists() {
        Err(DigestError::FileNotFound(path.to_path_buf()))
    } else {
        fs::read_to_string(path).map_err(DigestError::from)
    }
}

/// Reads a generated digest from standard input until EOF.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
