//! The plugin contract a pipeline host calls into.
//!
//! A step is described by a static [`PluginDescriptor`] (name, description
//! and attribute schema) and executed through the [`Plugin`] trait. Hosts
//! that do their own validation only need [`Plugin::execute`]; the others
//! can use [`PluginDescriptor::resolve`] or go through a
//! [`Registry`](crate::Registry), which validates before executing.

use crate::error::{Error, Result};
use crate::value::{Value, ValueType, Values};
use std::collections::HashSet;

/// Shape of one named input a step requires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub value_type: ValueType,
    /// Value used when the host supplies none. `None` makes the attribute mandatory.
    pub default_value: Option<Value>,
}

impl AttributeSpec {
    /// A mandatory attribute without default.
    pub const fn required(
        name: &'static str,
        description: &'static str,
        value_type: ValueType,
    ) -> Self {
        Self {
            name,
            description,
            value_type,
            default_value: None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }
}

/// Static metadata of a step.
///
/// Attributes keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: &'static [AttributeSpec],
}

impl PluginDescriptor {
    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Verify the descriptor itself: attribute names are unique and every
    /// default value has the attribute's declared type.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for attribute in self.attributes {
            if !seen.insert(attribute.name) {
                return Err(Error::DuplicateAttribute(attribute.name.to_owned()));
            }
            if let Some(default) = &attribute.default_value {
                if default.value_type() != attribute.value_type {
                    return Err(Error::InvalidDefault {
                        name: attribute.name.to_owned(),
                        expected: attribute.value_type,
                        found: default.value_type(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate `values` against the schema and return the effective values.
    ///
    /// Every declared attribute must be supplied with its declared type, or
    /// have a default, which is filled in. Names the schema does not declare
    /// are rejected.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownAttribute`] for a supplied name not in the schema
    /// - [`Error::TypeMismatch`] for a value of the wrong type
    /// - [`Error::MissingAttribute`] for a mandatory attribute not supplied
    pub fn resolve(&self, values: &Values) -> Result<Values> {
        for name in values.keys() {
            if self.attribute(name).is_none() {
                return Err(Error::UnknownAttribute(name.clone()));
            }
        }

        let mut resolved = Values::with_capacity(self.attributes.len());
        for attribute in self.attributes {
            let value = match values.get(attribute.name) {
                Some(value) => {
                    if value.value_type() != attribute.value_type {
                        return Err(Error::TypeMismatch {
                            name: attribute.name.to_owned(),
                            expected: attribute.value_type,
                            found: value.value_type(),
                        });
                    }
                    value.clone()
                }
                None => match &attribute.default_value {
                    Some(default) => default.clone(),
                    None => return Err(Error::MissingAttribute(attribute.name.to_owned())),
                },
            };
            resolved.insert(attribute.name.to_owned(), value);
        }

        Ok(resolved)
    }
}

/// A pipeline step.
///
/// Implementors provide a static descriptor and the execute function; the
/// metadata accessors are derived from the descriptor.
pub trait Plugin: Send + Sync {
    fn descriptor(&self) -> &'static PluginDescriptor;

    /// Run the step with the values supplied by the host.
    ///
    /// Values are not validated against the schema here beyond what the step
    /// needs to read them; a missing or mistyped attribute fails with
    /// [`Error::MissingAttribute`] or [`Error::TypeMismatch`].
    fn execute(&self, values: &Values) -> Result<()>;

    /// Stable unique identifier of the step.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Short human-readable description.
    fn desc(&self) -> &'static str {
        self.descriptor().description
    }

    /// Declared inputs, in declaration order.
    fn attributes(&self) -> &'static [AttributeSpec] {
        self.descriptor().attributes
    }
}

/// Read a [`ValueType::Str`] attribute.
pub(crate) fn str_attribute<'a>(values: &'a Values, name: &str) -> Result<&'a str> {
    let value = values
        .get(name)
        .ok_or_else(|| Error::MissingAttribute(name.to_owned()))?;
    value.as_str().ok_or_else(|| Error::TypeMismatch {
        name: name.to_owned(),
        expected: ValueType::Str,
        found: value.value_type(),
    })
}

/// Read a [`ValueType::StrList`] attribute.
pub(crate) fn str_list_attribute<'a>(values: &'a Values, name: &str) -> Result<&'a [String]> {
    let value = values
        .get(name)
        .ok_or_else(|| Error::MissingAttribute(name.to_owned()))?;
    value.as_str_list().ok_or_else(|| Error::TypeMismatch {
        name: name.to_owned(),
        expected: ValueType::StrList,
        found: value.value_type(),
    })
}
