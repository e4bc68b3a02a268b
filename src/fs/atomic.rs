//! Atomic output writes.
//!
//! Rendered output is written to a uniquely named temporary file next to the
//! target, synced, and then persisted over the target. A failed render or
//! write therefore never leaves a truncated output file behind: the target
//! either keeps its old content or does not exist.
//!
//! Replacing the file must still look like an in-place overwrite:
//!
//! - a symlinked output is followed, so the link survives and its
//!   destination receives the new content
//! - the permissions of an existing output are copied onto the replacement
//!
//! The temporary file lives in the resolved target's own directory so the
//! final rename never crosses filesystems.

use crate::error::{InjectorError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Atomically write bytes to a file, creating missing parent directories.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if path.file_name().is_none() {
        return Err(InjectorError::io(
            "write output file",
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
        ));
    }

    let target = resolve_target(path)?;
    let parent = parent_dir(&target);
    if !parent.exists() {
        fs::create_dir_all(parent)
            .map_err(|e| InjectorError::io("create output directory", parent, e))?;
    }

    let mut temp = NamedTempFile::new_in(parent)
        .map_err(|e| InjectorError::io("create temporary file", parent, e))?;
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| InjectorError::io("write temporary file", temp.path(), e))?;

    match fs::metadata(&target) {
        Ok(existing) => temp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| InjectorError::io("copy permissions of", &target, e))?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(InjectorError::io("inspect output file", &target, e)),
    }

    // On failure the returned handle is dropped, which removes the temp file.
    temp.persist(&target)
        .map_err(|e| InjectorError::io("write output file", path, e.error))?;

    sync_dir(parent);
    Ok(())
}

/// Atomically write a string to a file as UTF-8.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// The path whose content should be replaced: symlinks are followed, a
/// dangling link resolves to where it points.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => match fs::read_link(path) {
            Ok(destination) => Ok(parent_dir(path).join(destination)),
            Err(_) => Ok(path.to_path_buf()),
        },
        Err(e) => Err(InjectorError::io("resolve output path", path, e)),
    }
}

/// Directory containing `path`; `.` for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Persist the directory entry created by the rename.
#[cfg(unix)]
fn sync_dir(dir: &Path) {
    if let Ok(dir) = fs::File::open(dir) {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) {}
