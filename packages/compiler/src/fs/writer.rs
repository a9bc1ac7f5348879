//! Atomic file output.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{CompilerError, Result};

/// Write `contents` to `path`, creating parent directories as needed.
///
/// Data goes to a hidden temp file next to the target, is synced, and is
/// then renamed over the target, so readers never observe a partial file
/// and a failure leaves any other output untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CompilerError::InvalidPath(path.to_path_buf()))?;
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;

    let temp_file = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}
