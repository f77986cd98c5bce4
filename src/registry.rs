//! Name-keyed collection of steps.
//!
//! Hosts that do not keep their own plugin table can resolve steps by name
//! here. [`Registry::execute`] validates values against the step's schema
//! before running it.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::plugin::Plugin;
use crate::plugins::{CopyListPlugin, CopyPlugin};
use crate::value::Values;
use std::collections::BTreeMap;
use std::fmt;

/// Steps keyed by [`Plugin::name`].
#[derive(Default)]
pub struct Registry {
    plugins: BTreeMap<&'static str, Box<dyn Plugin>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `copy` and `copy-list`, both configured with `options`.
    pub fn builtin(options: CopyOptions) -> Self {
        let mut plugins: BTreeMap<&'static str, Box<dyn Plugin>> = BTreeMap::new();
        let copy = CopyPlugin::new(options.clone());
        let copy_list = CopyListPlugin::new(options);
        plugins.insert(copy.name(), Box::new(copy));
        plugins.insert(copy_list.name(), Box::new(copy_list));
        Self { plugins }
    }

    /// Add a step.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicatePlugin`] if a step with the same name is registered,
    /// or the descriptor's own check error if it is inconsistent.
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) -> Result<()> {
        plugin.descriptor().check()?;
        let name = plugin.name();
        if self.plugins.contains_key(name) {
            return Err(Error::DuplicatePlugin(name.to_owned()));
        }
        self.plugins.insert(name, Box::new(plugin));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn Plugin> {
        self.plugins.get(name).map(|p| &**p)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.values().map(|p| &**p)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Validate `values` against the named step's schema, then run it.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPlugin`] for an unregistered name, any error from
    /// [`PluginDescriptor::resolve`](crate::PluginDescriptor::resolve), or the
    /// step's own failure.
    pub fn execute(&self, name: &str, values: &Values) -> Result<()> {
        let plugin = self
            .get(name)
            .ok_or_else(|| Error::UnknownPlugin(name.to_owned()))?;
        let resolved = plugin.descriptor().resolve(values)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(plugin = name, "executing step");

        plugin.execute(&resolved)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("plugins", &self.names())
            .finish()
    }
}
