//! Configuration options for copy steps.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior and
//! [`OnLengthMismatch`] for deciding what `copy-list` does with lists of
//! different length.
//!
//! # Example
//!
//! ```
//! use pipecopy::{CopyOptions, OnLengthMismatch};
//!
//! let options = CopyOptions::default()
//!     .with_fsync()
//!     .with_on_length_mismatch(OnLengthMismatch::Continue);
//! ```

/// Behavior when `src` and `dst` lists have different lengths.
///
/// The mismatch diagnostic is emitted in both cases; this only decides
/// what happens afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnLengthMismatch {
    /// Fail with [`Error::LengthMismatch`](crate::Error::LengthMismatch)
    /// before copying anything (default).
    #[default]
    Fail,
    /// Copy pairs in order over the `src` list.
    ///
    /// If `dst` is shorter, the first `src` index without a destination fails
    /// with [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) after the
    /// earlier pairs were copied. Surplus `dst` entries are ignored.
    Continue,
}

/// Options for copy operations.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `fsync` | `false` | Sync to disk after write |
/// | `atomic` | `false` | Write via temp file + rename |
/// | `on_length_mismatch` | `Fail` | Fail before copying |
/// | `warn_handler` | `None` | Log diagnostics |
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CopyOptions {
    /// Whether to sync files to disk after writing (default: false)
    pub fsync: bool,

    /// Whether to write through a temporary file in the destination
    /// directory and rename it into place (default: false)
    ///
    /// When false, the destination is truncated and written in place, so a
    /// failure mid-copy may leave a partial file behind.
    pub atomic: bool,

    /// What `copy-list` does when `src` and `dst` differ in length
    pub on_length_mismatch: OnLengthMismatch,

    /// Callback for diagnostics (optional)
    ///
    /// If not set, diagnostics are logged via tracing when the `tracing`
    /// feature is enabled, and written to stderr otherwise.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,
}

impl CopyOptions {
    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Sync every written file to disk before returning
    #[must_use]
    pub fn with_fsync(mut self) -> Self {
        self.fsync = true;
        self
    }

    /// Disable fsync (the default)
    #[must_use]
    pub fn without_fsync(mut self) -> Self {
        self.fsync = false;
        self
    }

    /// Write through a temp file and rename, never leaving a partial destination
    #[must_use]
    pub fn with_atomic(mut self) -> Self {
        self.atomic = true;
        self
    }

    /// Set the list length mismatch behavior
    #[must_use]
    pub fn with_on_length_mismatch(mut self, on_length_mismatch: OnLengthMismatch) -> Self {
        self.on_length_mismatch = on_length_mismatch;
        self
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::warn!("{}", msg);

        #[cfg(not(feature = "tracing"))]
        eprintln!("{}", msg);
    }
}
