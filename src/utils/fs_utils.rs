// File system utilities

use std::fs;
use std::path::Path;
use tracing::info;

use crate::utils::error::{Result, ScaffoldError};

pub fn ensure_directory_exists(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write `content` to `path`, creating parent directories. An existing file
/// is only replaced when `force` is set.
pub fn write_generated_file(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ScaffoldError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    fs::write(path, content)?;
    info!(path = %path.display(), "wrote file");
    Ok(())
}
