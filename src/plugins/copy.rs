use crate::copy::copy_file;
use crate::error::Result;
use crate::options::CopyOptions;
use crate::plugin::{AttributeSpec, Plugin, PluginDescriptor, str_attribute};
use crate::value::{ValueType, Values};
use std::path::Path;

static ATTRIBUTES: [AttributeSpec; 2] = [
    AttributeSpec::required("src", "a source file to be copied", ValueType::Str),
    AttributeSpec::required(
        "dst",
        "a destination path for the copied file to be placed",
        ValueType::Str,
    ),
];

/// Descriptor of the `copy` step.
pub static COPY: PluginDescriptor = PluginDescriptor {
    name: "copy",
    description: "copy the src file to dst",
    attributes: &ATTRIBUTES,
};

/// Copies the file at `src` to `dst`.
///
/// See [`copy_file`] for the exact semantics and failure modes.
#[derive(Debug, Clone, Default)]
pub struct CopyPlugin {
    options: CopyOptions,
}

impl CopyPlugin {
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }
}

impl Plugin for CopyPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &COPY
    }

    fn execute(&self, values: &Values) -> Result<()> {
        let src = str_attribute(values, "src")?;
        let dst = str_attribute(values, "dst")?;
        copy_file(Path::new(src), Path::new(dst), &self.options)?;
        Ok(())
    }
}
