//! Error types for pipecopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while describing, validating, or executing a copy step,
//! the [`ErrorCode`] categories hosts can match on, and the [`Result`] alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | IO | [`Error::Io`], [`Error::TempFile`], [`Error::Persist`] |
//! | Copy | [`Error::IsADirectory`], [`Error::SameFile`] |
//! | List | [`Error::LengthMismatch`], [`Error::IndexOutOfRange`] |
//! | Schema | [`Error::MissingAttribute`], [`Error::UnknownAttribute`], [`Error::TypeMismatch`] |
//! | Descriptor | [`Error::InvalidDefault`], [`Error::DuplicateAttribute`] |
//! | Registry | [`Error::UnknownPlugin`], [`Error::DuplicatePlugin`] |

use crate::value::ValueType;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipecopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Stable, machine-readable category of an [`Error`].
///
/// Hosts that report failures of a step in structured form should use
/// [`ErrorCode::as_str`] rather than matching on display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorCode {
    NotFound,
    PermissionDenied,
    IsADirectory,
    SameFile,
    NoSpace,
    LengthMismatch,
    IndexOutOfRange,
    InvalidInput,
    UnknownPlugin,
    IoError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::IsADirectory => "is_a_directory",
            Self::SameFile => "same_file",
            Self::NoSpace => "no_space",
            Self::LengthMismatch => "length_mismatch",
            Self::IndexOutOfRange => "index_out_of_range",
            Self::InvalidInput => "invalid_input",
            Self::UnknownPlugin => "unknown_plugin",
            Self::IoError => "io_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while running a copy step.
///
/// Filesystem failures are carried unchanged in [`Error::Io`], so the
/// original [`io::ErrorKind`] stays available to the host.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Source is a directory
    #[error("Source is a directory: {0}")]
    IsADirectory(PathBuf),

    /// Source and destination refer to the same file
    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),

    /// Failed to create temporary file (atomic mode)
    #[error("Failed to create temporary file in {path}: {source}")]
    TempFile {
        /// Directory where temp file creation was attempted
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to persist temporary file (atomic mode)
    #[error("Failed to persist temporary file to {path}: {source}")]
    Persist {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// `src` and `dst` lists differ in length
    #[error("src and dst have different length ({src_len} vs {dst_len})")]
    LengthMismatch { src_len: usize, dst_len: usize },

    /// A list index has no counterpart in the shorter list
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A required attribute was not supplied
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// A supplied attribute is not declared by the step
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A supplied attribute has the wrong value type
    #[error("Attribute '{name}' must be {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    /// A declared default value does not match the attribute type
    #[error("Default value of attribute '{name}' is {found}, but the attribute is {expected}")]
    InvalidDefault {
        name: String,
        expected: ValueType,
        found: ValueType,
    },

    /// Two attributes of one descriptor share a name
    #[error("Attribute declared twice: {0}")]
    DuplicateAttribute(String),

    /// No step is registered under this name
    #[error("Unknown plugin: {0}")]
    UnknownPlugin(String),

    /// A step with this name is already registered
    #[error("Plugin already registered: {0}")]
    DuplicatePlugin(String),
}

impl Error {
    /// Category of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(source)
            | Self::TempFile { source, .. }
            | Self::Persist { source, .. } => io_error_code(source),
            Self::IsADirectory(_) => ErrorCode::IsADirectory,
            Self::SameFile(_) => ErrorCode::SameFile,
            Self::LengthMismatch { .. } => ErrorCode::LengthMismatch,
            Self::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            Self::MissingAttribute(_)
            | Self::UnknownAttribute(_)
            | Self::TypeMismatch { .. }
            | Self::InvalidDefault { .. }
            | Self::DuplicateAttribute(_)
            | Self::DuplicatePlugin(_) => ErrorCode::InvalidInput,
            Self::UnknownPlugin(_) => ErrorCode::UnknownPlugin,
        }
    }

    /// The underlying [`io::ErrorKind`], if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(source)
            | Self::TempFile { source, .. }
            | Self::Persist { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

fn io_error_code(error: &io::Error) -> ErrorCode {
    if is_no_space_error(error) {
        return ErrorCode::NoSpace;
    }
    match error.kind() {
        io::ErrorKind::NotFound => ErrorCode::NotFound,
        io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
        io::ErrorKind::IsADirectory => ErrorCode::IsADirectory,
        _ => ErrorCode::IoError,
    }
}
