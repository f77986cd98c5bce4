//! Built-in copy steps.

mod copy;
mod copy_list;

pub use copy::{COPY, CopyPlugin};
pub use copy_list::{COPY_LIST, CopyListPlugin};
