//! Helpers shared by the copy operations: content transfer and file identity.

use std::fs::{self, File};
use std::io;
use std::path::Path;

// =============================================================================
// File content copying
// =============================================================================

/// Copy file contents using the best available method.
///
/// On Linux 4.5+, uses `copy_file_range` for kernel-to-kernel transfer.
/// Falls back to `std::io::copy` on other platforms or when the kernel call
/// is not supported for this pair of files.
pub(crate) fn copy_file_contents(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        copy_file_range_all(src, dst, len)
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = len;
        buffered_copy(src, dst)
    }
}

fn buffered_copy(src: &File, dst: &File) -> io::Result<u64> {
    use std::io::BufReader;
    io::copy(&mut BufReader::new(src), &mut &*dst)
}

#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File, len: u64) -> io::Result<u64> {
    use std::os::unix::io::AsRawFd;

    let src_fd = src.as_raw_fd();
    let dst_fd = dst.as_raw_fd();
    let mut remaining = len;
    let mut copied: u64 = 0;

    while remaining > 0 {
        let chunk_size = remaining.min(128 * 1024 * 1024) as usize;

        // SAFETY: both descriptors are open for the duration of the call and
        // null offsets make the kernel use and advance the file positions.
        let result = unsafe {
            libc::copy_file_range(
                src_fd,
                std::ptr::null_mut(),
                dst_fd,
                std::ptr::null_mut(),
                chunk_size,
                0,
            )
        };

        if result < 0 {
            let err = io::Error::last_os_error();
            if copied == 0
                && matches!(
                    err.raw_os_error(),
                    Some(libc::EXDEV)
                        | Some(libc::ENOSYS)
                        | Some(libc::EINVAL)
                        | Some(libc::EOPNOTSUPP)
                )
            {
                return buffered_copy(src, dst);
            }
            return Err(err);
        }

        if result == 0 {
            // Source shrank while copying
            break;
        }

        let bytes_copied = result as u64;
        copied += bytes_copied;
        remaining = remaining.saturating_sub(bytes_copied);
    }

    // stat may report 0 for files whose size is only known on read
    if len == 0 {
        return buffered_copy(src, dst);
    }

    Ok(copied)
}

// =============================================================================
// File identity
// =============================================================================

/// Whether `dst` already names the same file as `src`.
///
/// A missing `dst` is never the same file. On Unix this compares device and
/// inode, so hard links are detected too.
#[cfg(unix)]
pub(crate) fn is_same_file(_src: &Path, src_meta: &fs::Metadata, dst: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    match fs::metadata(dst) {
        Ok(dst_meta) => Ok(src_meta.dev() == dst_meta.dev() && src_meta.ino() == dst_meta.ino()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(not(unix))]
pub(crate) fn is_same_file(src: &Path, _src_meta: &fs::Metadata, dst: &Path) -> io::Result<bool> {
    match dst.canonicalize() {
        Ok(dst_canonical) => Ok(src.canonicalize()? == dst_canonical),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

// =============================================================================
// Tests
// =============================================================================
