use crate::Error;
use std::path::{Path, PathBuf};

/// Recursively collects transcript documents (`*.xml` and `*.xml.gz`) below `dir`, sorted by path.
///
/// # Errors
/// - `Error::IoError` if `dir` does not exist.
/// - `Error::Other` if a directory entry cannot be read.
pub fn discover_transcript_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, Error> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("'{}' does not exist", dir.display()),
        )));
    }

    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.ends_with(".xml") || name.ends_with(".xml.gz") {
            files.push(entry.into_path());
        }
    }

    files.sort();

    Ok(files)
}
