//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "memomail")]
#[command(about = "In-memory notebook and mailing-list tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $MEMOMAIL_CONFIG, then built-in defaults)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive notebook menu
    Notebook,

    /// Start the interactive mailing-list shell
    Mail {
        /// Sender address (overrides config)
        #[arg(long, value_name = "ADDR")]
        from: Option<String>,
    },

    /// View configuration or write a default config file
    #[command(args_conflicts_with_subcommands = true)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,

        /// Config key to print
        key: Option<String>,

        /// List the effective configuration
        #[arg(short, long, conflicts_with = "key")]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Where to write the file
        path: PathBuf,
    },
}
