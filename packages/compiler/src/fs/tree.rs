//! Directory traversal helpers.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::writer::write_atomic;
use crate::error::{CompilerError, Result};

/// Mirror every file under `src` into `dest`, passing contents through
/// `transform`.
///
/// `transform` receives the path relative to `src` and the raw bytes, and
/// returns the bytes to write. Directories are recreated, entries are
/// visited in file name order, and the number of files written is returned.
pub fn transform_tree<F>(src: &Path, dest: &Path, mut transform: F) -> Result<usize>
where
    F: FnMut(&Path, Vec<u8>) -> Vec<u8>,
{
    let mut count = 0;

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| CompilerError::InvalidPath(entry.path().to_path_buf()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        let contents = fs::read(entry.path())?;
        write_atomic(&target, &transform(relative, contents))?;
        count += 1;
    }

    tracing::debug!(src = %src.display(), dest = %dest.display(), files = count, "Copied tree");
    Ok(count)
}

/// Markdown files directly inside `dir`, sorted by file name.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
