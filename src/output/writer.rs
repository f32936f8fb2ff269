//! Report file writing

use crate::error::OutputError;
use log::debug;
use std::fs;
use std::path::Path;

/// Write the rendered report, replacing any existing file
pub fn write_report(path: &Path, content: &str) -> Result<(), OutputError> {
    fs::write(path, content).map_err(|e| OutputError::write_error(path, e))?;
    debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
