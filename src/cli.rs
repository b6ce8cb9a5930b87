use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Printed to stderr after a successful headless copy on Linux.
pub const LINUX_CLIPBOARD_HINT: &str =
    "note: on Linux the copied text lasts only while gqty-hero runs, unless a clipboard manager keeps it";

#[derive(Parser, Debug)]
#[command(name = "gqty-hero", version)]
#[command(about = "The GQty homepage hero in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.toml (default: ~/.gqty-hero/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy text to the clipboard (defaults to the install command)
    ///
    /// On Linux without a clipboard manager, the copied text is gone once this
    /// command exits. Use the interactive hero to keep it available.
    Copy {
        text: Option<String>,
    },
    /// Print the homepage copy
    Show,
}
