pub mod cmd_build;
pub mod cmd_children;
pub mod cmd_import;
pub mod cmd_index;
pub mod cmd_resolve;
pub mod cmd_show;
pub mod common;
