//! Output modes applied to the collected commands.

use std::io::Write;

use log::info;
use postinstall_core::error::{Error, Result};
use postinstall_core::execution::{execute_commands, execute_script};
use postinstall_core::script::{render_script, write_script};

use crate::cli_args::Args;

/// Hands the commands to the writer, the executor or `out`.
///
/// Progress messages go to `out`. Executed commands inherit the process
/// stdio, so `out` is flushed before anything is run.
///
/// # Errors
///
/// Returns [`Error::CommandFailed`] when a command or the written script
/// exits with a non-success status, and any error from writing the script.
pub fn emit_commands<W: Write>(out: &mut W, args: &Args, commands: &[String]) -> Result<()> {
    if let Some(filename) = &args.write {
        let path = write_script(filename.as_deref(), commands)?;
        writeln!(out, "# Script saved to {}", path.display())?;

        if args.exec {
            writeln!(out, "Executing script...")?;
            out.flush()?;

            match execute_script(&args.shell, &path) {
                Ok(()) => writeln!(out, "Execution finished with code 0")?,
                Err(Error::CommandFailed { command, code }) => {
                    writeln!(
                        out,
                        "Execution finished with code {}",
                        code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
                    )?;
                    return Err(Error::command_failed(command, code));
                }
                Err(e) => return Err(e),
            }
        }
    } else if args.exec {
        writeln!(out, "Executing directly...")?;
        out.flush()?;
        execute_commands(&args.shell, commands)?;
        info!("All {} commands succeeded", commands.len());
    } else {
        write!(out, "{}", render_script(commands))?;
    }

    out.flush()?;
    Ok(())
}
