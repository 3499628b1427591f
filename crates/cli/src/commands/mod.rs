//! CLI subcommand implementations.

pub mod check;
pub mod list;
pub mod note;
pub mod seed;
pub mod show;
