use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::convert;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Convert the markdown file at `source` and write the html to `target`
pub fn convert_file(source: &Path, target: &Path) -> Result<(), IoError> {
    let markdown = read_source(source)?;
    let html = convert(&markdown);
    write_file(target, &html)?;
    info!(
        "converted {} to {} ({} bytes)",
        source.display(),
        target.display(),
        html.len()
    );
    Ok(())
}
