use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::error::{Error, Result};

fn run(mut command: Command) -> Result<ExitStatus> {
    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(Error::SubProcess)?;

    Ok(status)
}

/// Runs each command with `<shell> -c`, stopping at the first failure.
///
/// Commands that already ran are not undone.
///
/// # Errors
///
/// Returns [`Error::CommandFailed`] for the first command exiting with a
/// non-success status, or [`Error::SubProcess`] if the shell cannot be spawned.
pub fn execute_commands(shell: &str, commands: &[String]) -> Result<()> {
    for command_line in commands {
        info!("Executing: {command_line}");

        let mut command = Command::new(shell);
        command.args(["-c", command_line.as_str()]);

        let status = run(command)?;
        if !status.success() {
            return Err(Error::command_failed(command_line.clone(), status.code()));
        }
    }

    Ok(())
}

/// Runs a script file with `<shell> <path>`.
///
/// # Errors
///
/// Returns [`Error::CommandFailed`] naming the script if it exits with a
/// non-success status, or [`Error::SubProcess`] if the shell cannot be spawned.
pub fn execute_script(shell: &str, path: &Path) -> Result<()> {
    info!("Executing script `{}`", path.display());

    let mut command = Command::new(shell);
    command.arg(path);

    let status = run(command)?;
    if !status.success() {
        return Err(Error::command_failed(
            path.display().to_string(),
            status.code(),
        ));
    }

    Ok(())
}
