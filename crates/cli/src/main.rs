use std::io::{stdin, stdout, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use postinstall_core::collector::collect_commands;
use postinstall_core::error::Result;
use postinstall_core::source::{load_menu, ConfigSource};

use postinstall_cli::cli_args::Args;
use postinstall_cli::menu_selection::{self, MenuOutcome};
use postinstall_cli::output::emit_commands;

/// Exit code when the user aborts the menu with Ctrl+C.
const INTERRUPTED: u8 = 130;

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    // Configuration errors are reported before any UI is shown
    let source = ConfigSource::from_arg(args.file.as_deref(), stdin().is_terminal())?;
    debug!("Config source: `{source}`");
    let menu = load_menu(&source)?;

    menu_selection::install_signal_handler()?;

    let forest = match menu_selection::run_menu(menu.forest)? {
        MenuOutcome::Finished(forest) => forest,
        MenuOutcome::Interrupted => {
            info!("Interrupted, not emitting a script.");
            return Ok(ExitCode::from(INTERRUPTED));
        }
    };

    let commands = collect_commands(&forest, &menu.after, &args.render_config());
    info!("Collected {} commands", commands.len());

    emit_commands(&mut stdout(), &args, &commands)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
