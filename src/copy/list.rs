//! Pairwise list copy.

use crate::error::{Error, Result};
use crate::options::{CopyOptions, OnLengthMismatch};
use std::path::Path;
use std::time::{Duration, Instant};

use super::file::copy_file;

/// Diagnostic emitted when `src` and `dst` lists differ in length.
pub const LENGTH_MISMATCH_DIAGNOSTIC: &str = "copy-list error; src and dst have different length";

/// Statistics from a list copy.
///
/// # Example
///
/// ```no_run
/// use pipecopy::{copy_pairs, CopyOptions};
///
/// let stats = copy_pairs(&["a.txt", "b.txt"], &["out/a.txt", "out/b.txt"], &CopyOptions::default())?;
/// println!("Copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
/// # Ok::<(), pipecopy::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

/// Copy `src[i]` to `dst[i]` for every index, in ascending order.
///
/// Copies run one at a time with [`copy_file`] semantics. The first failure
/// stops the loop and is returned; pairs before it stay copied.
///
/// If the lists differ in length, [`LENGTH_MISMATCH_DIAGNOSTIC`] is emitted
/// through the options' warning channel before anything else happens, then
/// [`CopyOptions::on_length_mismatch`] decides:
///
/// - [`OnLengthMismatch::Fail`]: return [`Error::LengthMismatch`], nothing copied.
/// - [`OnLengthMismatch::Continue`]: walk `src`; a missing `dst[i]` fails with
///   [`Error::IndexOutOfRange`], surplus `dst` entries are ignored.
pub fn copy_pairs<S, D>(src: &[S], dst: &[D], options: &CopyOptions) -> Result<CopyStats>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let start = Instant::now();

    if src.len() != dst.len() {
        options.warn(LENGTH_MISMATCH_DIAGNOSTIC);
        if options.on_length_mismatch == OnLengthMismatch::Fail {
            return Err(Error::LengthMismatch {
                src_len: src.len(),
                dst_len: dst.len(),
            });
        }
    }

    let mut stats = CopyStats::default();

    for (index, src_path) in src.iter().enumerate() {
        let dst_path = dst.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: dst.len(),
        })?;

        stats.bytes_copied += copy_file(src_path.as_ref(), dst_path.as_ref(), options)?;
        stats.files_copied += 1;
    }

    stats.duration = start.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        files = stats.files_copied,
        bytes = stats.bytes_copied,
        "copied file list"
    );

    Ok(stats)
}
