//! Script text and script files.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::info;

use crate::config::expand_path;
use crate::error::{Error, Result};

pub const SCRIPT_HEADER: &str = "# Generated script";

/// Header line followed by one command per line.
pub fn render_script(commands: &[String]) -> String {
    let mut script = String::from(SCRIPT_HEADER);
    script.push('\n');

    for command in commands {
        script.push_str(command);
        script.push('\n');
    }

    script
}

/// `generated-script_<day>_<month>_<year>_<hhmmss>.sh`
pub fn generated_filename(now: DateTime<Local>) -> String {
    format!("generated-script_{}.sh", now.format("%d_%m_%Y_%H%M%S"))
}

/// Writes the script to `path`, or to a timestamped file in the current
/// directory when no path is given. Returns the path written.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_script(path: Option<&str>, commands: &[String]) -> Result<PathBuf> {
    let path = match path {
        Some(path) => PathBuf::from(expand_path(path)),
        None => PathBuf::from(generated_filename(Local::now())),
    };

    fs::write(&path, render_script(commands)).map_err(|e| {
        Error::io_error("script".to_string(), path.display().to_string(), e)
    })?;

    info!("Wrote {} commands to `{}`", commands.len(), path.display());
    Ok(path)
}
