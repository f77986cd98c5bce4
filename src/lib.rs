//! # pipecopy
//!
//! File copy steps for pipeline hosts.
//!
//! Two steps are provided, each described by a static schema and run
//! through the [`Plugin`] trait:
//!
//! - **`copy`** ([`CopyPlugin`]): copies one file, `src` to `dst`.
//! - **`copy-list`** ([`CopyListPlugin`]): copies `src[i]` to `dst[i]` for
//!   every index, in order.
//!
//! Copies are plain content copies: the destination is created or
//! overwritten, no permissions or timestamps are carried over, and every
//! filesystem error propagates to the caller unchanged.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pipecopy::{CopyOptions, Registry, Value, Values};
//!
//! let registry = Registry::builtin(CopyOptions::default());
//!
//! let values = Values::from([
//!     ("src".to_owned(), Value::from("a.txt")),
//!     ("dst".to_owned(), Value::from("out/a.txt")),
//! ]);
//! registry.execute("copy", &values)?;
//! # Ok::<(), pipecopy::Error>(())
//! ```
//!
//! ## Using a step directly
//!
//! A host with its own validation can call the step without a registry:
//!
//! ```no_run
//! use pipecopy::{CopyListPlugin, CopyOptions, OnLengthMismatch, Plugin, Value, Values};
//!
//! let step = CopyListPlugin::new(
//!     CopyOptions::default().with_on_length_mismatch(OnLengthMismatch::Continue),
//! );
//! for attribute in step.attributes() {
//!     println!("{}: {} ({})", attribute.name, attribute.description, attribute.value_type);
//! }
//!
//! let values = Values::from([
//!     ("src".to_owned(), Value::StrList(vec!["a.txt".into(), "b.txt".into()])),
//!     ("dst".to_owned(), Value::StrList(vec!["out/a.txt".into(), "out/b.txt".into()])),
//! ]);
//! step.execute(&values)?;
//! # Ok::<(), pipecopy::Error>(())
//! ```
//!
//! ## Length mismatches
//!
//! When `copy-list` receives lists of different length it always emits the
//! diagnostic `copy-list error; src and dst have different length`. By
//! default it then fails with [`Error::LengthMismatch`] without copying.
//! [`OnLengthMismatch::Continue`] instead copies pairs in order and fails
//! with [`Error::IndexOutOfRange`] at the first source without destination.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate (default) |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] and values |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
mod options;
mod plugin;
mod plugins;
mod registry;
mod value;

pub use builder::Invocation;
pub use copy::{CopyStats, LENGTH_MISMATCH_DIAGNOSTIC, copy_file, copy_pairs};
pub use error::{Error, ErrorCode, Result, is_no_space_error};
pub use options::{CopyOptions, OnLengthMismatch};
pub use plugin::{AttributeSpec, Plugin, PluginDescriptor};
pub use plugins::{COPY, COPY_LIST, CopyListPlugin, CopyPlugin};
pub use registry::Registry;
pub use value::{Value, ValueType, Values};
