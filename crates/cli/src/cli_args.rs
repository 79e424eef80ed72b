//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate.

use clap::Parser;
use postinstall_core::config::{
    RenderConfig, DEFAULT_AUR_MANAGER, DEFAULT_NOTIFY_COMMAND, DEFAULT_SHELL,
};

/// Command-line arguments for the postinstall tool.
///
/// Without `--write` or `--exec`, the generated script is printed to stdout.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use postinstall_cli::cli_args::Args;
///
/// let args = Args::parse_from(["postinstall", "-f", "packages.yml", "-w"]);
/// assert_eq!(args.write, Some(None));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0, about = "Arch-based GNU/Linux post install tool")]
pub struct Args {
    /// YAML config file, or an `http(s)://` / `file://` URL.
    ///
    /// If not provided, the YAML is read from stdin.
    #[arg(long, short = 'f', value_name = "FILE|URL")]
    pub file: Option<String>,

    /// Execute the generated script.
    ///
    /// Combined with `--write`, the written file is run. Otherwise each
    /// command is run in turn, stopping at the first failure.
    #[arg(long, short = 'e', action)]
    pub exec: bool,

    /// Write the script to a file instead of printing it.
    ///
    /// Without a filename, a timestamped `generated-script_*.sh` is created
    /// in the current directory.
    #[arg(long, short = 'w', num_args(0..=1), value_name = "FILENAME")]
    pub write: Option<Option<String>>,

    /// Invocation substituted for `__MGR__` and used to install packages.
    #[arg(long, default_value = DEFAULT_AUR_MANAGER)]
    pub aur_manager: String,

    /// Invocation substituted for `__NOTIFY__`.
    #[arg(long, default_value = DEFAULT_NOTIFY_COMMAND)]
    pub notify_command: String,

    /// Shell used to execute commands with `--exec`.
    #[arg(long, default_value = DEFAULT_SHELL)]
    pub shell: String,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_aur_manager(&self.aur_manager)
            .with_notify_command(&self.notify_command)
    }
}
