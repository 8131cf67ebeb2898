//! Locating transcript files on disk.

pub mod filename;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Find the transcripts to convert under `source`.
///
/// A directory is listed non-recursively and filtered to regular files with the
/// given extension whose names are not in `exclude`; results are sorted by file
/// name so output order does not depend on the filesystem. A file path is
/// returned as-is.
pub fn discover(source: &Path, extension: &str, exclude: &[String]) -> io::Result<Vec<PathBuf>> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !filename::has_extension(&name, extension) {
            continue;
        }
        if exclude.iter().any(|excluded| excluded == &name) {
            tracing::debug!(file = %name, "excluded");
            continue;
        }
        found.push(entry.path());
    }

    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(found)
}
