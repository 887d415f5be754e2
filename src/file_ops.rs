use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Result type for filesystem operations
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Error types for filesystem operations
#[derive(Debug)]
pub enum OrganizeError {
    CopyFailed(String),
    LayoutFailed(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrganizeError::CopyFailed(msg) => write!(f, "Copy failed: {}", msg),
            OrganizeError::LayoutFailed(msg) => write!(f, "Layout failed: {}", msg),
            OrganizeError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for OrganizeError {}

impl From<std::io::Error> for OrganizeError {
    fn from(error: std::io::Error) -> Self {
        OrganizeError::IoError(error)
    }
}

/// Copy a source image to a destination inside the target tree. The
/// source file is left in place; the source tree is never mutated.
///
/// # Arguments
/// * `src` - Source file path
/// * `dest` - Destination file path
///
/// # Returns
/// * `Ok(())` if successful
/// * `Err(OrganizeError)` if the copy failed
pub fn copy_file(src: &Path, dest: &Path) -> OrganizeResult<()> {
    debug!("Copying file from {:?} to {:?}", src, dest);

    if let Err(e) = fs::copy(src, dest) {
        error!("Failed to copy file from {:?} to {:?}: {}", src, dest, e);
        return Err(OrganizeError::CopyFailed(format!(
            "Failed to copy from {:?} to {:?}: {}",
            src, dest, e
        )));
    }

    Ok(())
}

/// Create a directory and any missing parents. Already-existing
/// directories are left untouched.
pub fn ensure_dir(dir: &Path) -> OrganizeResult<()> {
    if let Err(e) = fs::create_dir_all(dir) {
        error!("Failed to create directory {:?}: {}", dir, e);
        return Err(OrganizeError::LayoutFailed(format!(
            "Failed to create directory {:?}: {}",
            dir, e
        )));
    }
    Ok(())
}

/// Count the entries currently present in a directory. Counts every
/// entry, files and subdirectories alike.
pub fn count_dir_entries(dir: &Path) -> OrganizeResult<usize> {
    let entries = fs::read_dir(dir)?;
    Ok(entries.count())
}
