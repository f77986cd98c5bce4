use crate::copy::copy_pairs;
use crate::error::Result;
use crate::options::CopyOptions;
use crate::plugin::{AttributeSpec, Plugin, PluginDescriptor, str_list_attribute};
use crate::value::{ValueType, Values};

static ATTRIBUTES: [AttributeSpec; 2] = [
    AttributeSpec::required("src", "source files to be copied", ValueType::StrList),
    AttributeSpec::required(
        "dst",
        "destination paths for the copied files to be placed",
        ValueType::StrList,
    ),
];

/// Descriptor of the `copy-list` step.
pub static COPY_LIST: PluginDescriptor = PluginDescriptor {
    name: "copy-list",
    description: "copy the src files to dst",
    attributes: &ATTRIBUTES,
};

/// Copies `src[i]` to `dst[i]` for every index, in order.
///
/// Length mismatches are reported and handled as described on
/// [`copy_pairs`], according to the plugin's [`CopyOptions`].
#[derive(Debug, Clone, Default)]
pub struct CopyListPlugin {
    options: CopyOptions,
}

impl CopyListPlugin {
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }
}

impl Plugin for CopyListPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &COPY_LIST
    }

    fn execute(&self, values: &Values) -> Result<()> {
        let src = str_list_attribute(values, "src")?;
        let dst = str_list_attribute(values, "dst")?;
        copy_pairs(src, dst, &self.options)?;
        Ok(())
    }
}
