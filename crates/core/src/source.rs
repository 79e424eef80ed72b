//! Locating, reading and decoding the YAML configuration.
//!
//! The configuration can come from a local file, an `http(s)://` or
//! `file://` URL, or from standard input when it is piped.

use std::fmt::{Display, Formatter};
use std::fs;
use std::io;

use log::debug;
use serde_yaml::Value;

use crate::config::expand_path;
use crate::error::{Error, Result};
use crate::menu_definitions::MenuDefinition;
use crate::tree_builder::build_menu;

const FILE_URL_PREFIX: &str = "file://";
const REMOTE_URL_PREFIXES: [&str; 2] = ["http://", "https://"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Stdin,
    File(String),
    Url(String),
}

impl ConfigSource {
    /// Classifies the `-f` argument.
    ///
    /// Without an argument, standard input is used if it is not a terminal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConfigSource`] if there is no argument and standard
    /// input is a terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use postinstall_core::source::ConfigSource;
    ///
    /// let source = ConfigSource::from_arg(Some("https://example.com/a.yml"), true).unwrap();
    /// assert_eq!(source, ConfigSource::Url("https://example.com/a.yml".to_string()));
    /// ```
    pub fn from_arg(file_arg: Option<&str>, stdin_is_terminal: bool) -> Result<Self> {
        let Some(file_arg) = file_arg else {
            if stdin_is_terminal {
                return Err(Error::NoConfigSource);
            }
            return Ok(Self::Stdin);
        };

        if REMOTE_URL_PREFIXES
            .iter()
            .any(|prefix| file_arg.starts_with(prefix))
        {
            return Ok(Self::Url(file_arg.to_string()));
        }

        let path = file_arg.strip_prefix(FILE_URL_PREFIX).unwrap_or(file_arg);
        Ok(Self::File(expand_path(path)))
    }
}

impl Display for ConfigSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Stdin => formatter.write_str("<stdin>"),
            ConfigSource::File(path) => formatter.write_str(path),
            ConfigSource::Url(url) => formatter.write_str(url),
        }
    }
}

/// Reads the raw configuration text.
///
/// # Errors
///
/// Returns an error if the file or standard input cannot be read, or if the
/// URL cannot be fetched or answers with a non-success status.
pub fn load_text(source: &ConfigSource) -> Result<String> {
    debug!("Loading configuration from `{source}`");

    match source {
        ConfigSource::Stdin => io::read_to_string(io::stdin())
            .map_err(|e| Error::io_error("config".to_string(), source.to_string(), e)),
        ConfigSource::File(path) => fs::read_to_string(path)
            .map_err(|e| Error::io_error("config".to_string(), path.clone(), e)),
        ConfigSource::Url(url) => download(url),
    }
}

fn download(url: &str) -> Result<String> {
    let to_error = |e| Error::download_error(url.to_string(), e);

    reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(to_error)
}

/// Decodes YAML text into a document tree.
///
/// # Errors
///
/// Returns [`Error::Yaml`] if the text is not valid YAML.
pub fn parse_document(text: &str, description: &str) -> Result<Value> {
    serde_yaml::from_str(text).map_err(|e| Error::yaml_error(description.to_string(), e))
}

/// Loads, decodes and builds the menu in one go.
///
/// # Errors
///
/// Any error from [`load_text`], [`parse_document`] or
/// [`build_menu`](crate::tree_builder::build_menu).
pub fn load_menu(source: &ConfigSource) -> Result<MenuDefinition> {
    let description = source.to_string();
    let text = load_text(source)?;
    let document = parse_document(&text, &description)?;
    build_menu(&document, &description)
}
