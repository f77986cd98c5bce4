//! Single file copy.
//!
//! This is the primitive both steps are built on: a byte-for-byte copy of
//! one regular file that creates or overwrites the destination and carries
//! no metadata over.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::{self, File};
use std::path::Path;

use super::utils::{copy_file_contents, is_same_file};

/// Copy the contents of `src` to `dst`, creating or overwriting `dst`.
///
/// Permissions and timestamps are not copied: a new destination gets the
/// process defaults, an existing one keeps its own.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
/// * `options` - Copy options (`fsync` and `atomic` apply here)
///
/// # Returns
///
/// The number of bytes written to `dst`.
///
/// # Errors
///
/// Returns an error if:
/// - Source does not exist or cannot be read ([`Error::Io`])
/// - Source is a directory ([`Error::IsADirectory`])
/// - Source and destination are the same file ([`Error::SameFile`])
/// - The destination directory is missing or not writable ([`Error::Io`],
///   or [`Error::TempFile`] in atomic mode)
/// - Atomic rename fails ([`Error::Persist`])
///
/// `src` is checked before `dst` is opened, so a missing source never
/// touches the destination.
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    let src_meta = fs::metadata(src)?;

    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }

    if is_same_file(src, &src_meta, dst)? {
        return Err(Error::SameFile(dst.to_path_buf()));
    }

    let src_file = File::open(src)?;
    let file_len = src_meta.len();

    let bytes = if options.atomic {
        copy_via_temp(&src_file, file_len, dst, options)?
    } else {
        let dst_file = File::create(dst)?;
        let bytes = copy_file_contents(&src_file, &dst_file, file_len)?;
        if options.fsync {
            dst_file.sync_all()?;
        }
        bytes
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");

    Ok(bytes)
}

/// Write into a temp file next to `dst`, then rename it over `dst`.
fn copy_via_temp(src_file: &File, file_len: u64, dst: &Path, options: &CopyOptions) -> Result<u64> {
    let dst_parent = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = new_temp_file(dst_parent).map_err(|e| Error::TempFile {
        path: dst_parent.to_path_buf(),
        source: e,
    })?;

    let bytes = copy_file_contents(src_file, temp_file.as_file(), file_len)?;

    if options.fsync {
        temp_file.as_file().sync_all()?;
    }

    temp_file.persist(dst).map_err(|e| Error::Persist {
        path: dst.to_path_buf(),
        source: e.error,
    })?;

    Ok(bytes)
}

#[cfg(unix)]
fn new_temp_file(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // 0o666 before umask, matching what File::create would produce
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn new_temp_file(dir: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    tempfile::NamedTempFile::new_in(dir)
}

// =============================================================================
// Tests
// =============================================================================
