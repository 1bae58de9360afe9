//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ConfigAction};
pub use output::{format_address_list, format_config, format_note_list};
