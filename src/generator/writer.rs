use crate::Result;
use crate::error::PostgenError;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write generated content to `path`, replacing any previous file.
///
/// # Concurrency Strategy
/// The file is opened without truncation, locked with `fs2::lock_exclusive`,
/// and only then truncated, so two generators racing on the same path never
/// interleave their output. The lock is released when the handle drops.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(PostgenError::IoError)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .map_err(PostgenError::IoError)?;

    file.lock_exclusive().map_err(PostgenError::IoError)?;

    file.set_len(0).map_err(PostgenError::IoError)?;
    file.write_all(contents.as_bytes())
        .map_err(PostgenError::IoError)?;
    file.flush().map_err(PostgenError::IoError)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Output written");

    Ok(())
}
