//! Puzzle input loading

use crate::error::InputError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the whole input from `path`, or from stdin when `path` is `-`
pub fn read_input(path: &Path) -> Result<String, InputError> {
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };

    if content.trim().is_empty() {
        return Err(InputError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(content)
}
