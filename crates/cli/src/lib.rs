//! Postinstall CLI Library
//!
//! This crate provides the command-line interface for postinstall. It shows
//! the interactive checklist built from a YAML document and hands the
//! resulting commands to a printer, a file writer or an executor.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`menu_selection`]: Terminal session, key mapping and drawing
//! - [`output`]: Printing, writing or executing the collected commands
//!
//! # Examples
//!
//! The CLI binary (`postinstall`) can be used in several ways:
//!
//! ```bash
//! # Print the script for the selection
//! postinstall -f packages.yml
//!
//! # Read the YAML from a URL and run the selection right away
//! postinstall -f https://example.com/packages.yml -e
//!
//! # Pipe the YAML in and write the script to a timestamped file
//! cat packages.yml | postinstall -w
//!
//! # Write to a named file, then run it
//! postinstall -f packages.yml -w install.sh -e
//! ```

pub mod cli_args;
pub mod menu_selection;
pub mod output;
