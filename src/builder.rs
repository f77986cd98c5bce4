//! Builder API for assembling step invocations.
//!
//! Hosts usually construct [`Values`] from their own pipeline definitions.
//! For programmatic use the builder is shorter:
//!
//! ```no_run
//! use pipecopy::{CopyOptions, Invocation, Registry};
//!
//! let registry = Registry::builtin(CopyOptions::default());
//!
//! Invocation::new("copy-list")
//!     .str_list("src", ["a.txt", "b.txt"])
//!     .str_list("dst", ["out/a.txt", "out/b.txt"])
//!     .run(&registry)?;
//! # Ok::<(), pipecopy::Error>(())
//! ```

use crate::error::Result;
use crate::registry::Registry;
use crate::value::{Value, Values};

/// A named step plus the values to run it with.
#[derive(Debug, Clone)]
pub struct Invocation {
    plugin: String,
    values: Values,
}

impl Invocation {
    /// Start an invocation of the step registered as `plugin`.
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            values: Values::new(),
        }
    }

    /// Set a [`ValueType::Str`](crate::ValueType::Str) attribute.
    #[must_use]
    pub fn str(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), Value::Str(value.into()));
        self
    }

    /// Set a [`ValueType::StrList`](crate::ValueType::StrList) attribute.
    #[must_use]
    pub fn str_list<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = values.into_iter().map(Into::into).collect();
        self.values.insert(name.into(), Value::StrList(list));
        self
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Take the assembled values, dropping the step name.
    pub fn into_values(self) -> Values {
        self.values
    }

    /// Validate and execute through `registry`.
    pub fn run(&self, registry: &Registry) -> Result<()> {
        registry.execute(&self.plugin, &self.values)
    }
}
