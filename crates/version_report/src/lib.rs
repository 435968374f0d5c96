//! Reading version lists and rendering them as text.

pub mod render;
pub mod source;

pub use render::{write_group_table, write_group_tree, write_versions};
pub use source::{read_version_strings, read_version_strings_from_file, read_versions, read_versions_from_file};
