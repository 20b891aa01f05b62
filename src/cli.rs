use std::path::PathBuf;

use clap::Parser;

/// A status_command for i3 and sway which displays the transfer rate of the
/// most active network interface.
#[derive(Debug, Default, Parser)]
#[clap(author, version, name = "i3rate")]
pub struct Cli {
    /// Path to the configuration file (without extension, toml/json/yaml are
    /// all supported). Defaults to `<config_dir>/i3rate/config`.
    #[clap(long)]
    pub config: Option<PathBuf>,
}
