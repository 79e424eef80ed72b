//! Builds the menu forest from a decoded YAML document.
//!
//! The document layout is:
//!
//! ```yaml
//! sections:
//!   core:
//!     items:
//!       - vim
//!       - name: dotfiles
//!         enabled: false
//!         commands: ["git clone https://example.com/dotfiles ~/.dotfiles"]
//!     sections:
//!       fonts:
//!         items: [ttf-fira-code]
//! after:
//!   commands: ["__NOTIFY__ 'all done'"]
//! ```
//!
//! Anything that doesn't fit this shape is skipped with a warning. Only a
//! top level that is not a mapping fails the build.

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::menu_definitions::{Action, MenuDefinition, MenuNode};

/// Builds the forest and the trailing commands.
///
/// `path` is only used to describe the document in errors.
///
/// # Errors
///
/// Returns [`Error::NotAMapping`] if the document's top level is not a mapping.
///
/// # Examples
///
/// ```
/// use postinstall_core::tree_builder::build_menu;
///
/// let document: serde_yaml::Value = serde_yaml::from_str("sections: {core: {items: [vim]}}").unwrap();
/// let menu = build_menu(&document, "inline").unwrap();
/// assert_eq!(menu.forest[0].label, "core");
/// ```
pub fn build_menu(document: &Value, path: &str) -> Result<MenuDefinition> {
    if !document.is_mapping() {
        return Err(Error::NotAMapping {
            path: path.to_string(),
        });
    }

    let forest = document
        .get("sections")
        .map(parse_section_groups)
        .unwrap_or_default();

    let after = document
        .get("after")
        .and_then(|after| after.get("commands"))
        .map(scalar_list)
        .unwrap_or_default();

    Ok(MenuDefinition { forest, after })
}

/// A mapping of section groups, or a sequence of such mappings.
fn parse_section_groups(value: &Value) -> Vec<MenuNode> {
    match value {
        Value::Mapping(group) => parse_section_group(group),
        Value::Sequence(groups) => groups
            .iter()
            .flat_map(|group| match group {
                Value::Mapping(group) => parse_section_group(group),
                other => {
                    warn!("Skipping section group that is not a mapping: {other:?}");
                    Vec::new()
                }
            })
            .collect(),
        other => {
            warn!("Skipping `sections` that is neither a mapping nor a sequence: {other:?}");
            Vec::new()
        }
    }
}

fn parse_section_group(group: &Mapping) -> Vec<MenuNode> {
    let mut sections = Vec::new();

    for (key, body) in group {
        let Some(label) = scalar_string(key).filter(|label| !label.is_empty()) else {
            warn!("Skipping section with an unusable name: {key:?}");
            continue;
        };

        let mut children = body
            .get("sections")
            .map(parse_section_groups)
            .unwrap_or_default();

        if let Some(items) = body.get("items") {
            children.extend(parse_items(items));
        }

        sections.push(MenuNode::section(label, children));
    }

    sections
}

fn parse_items(value: &Value) -> Vec<MenuNode> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(parse_item).collect(),
        Value::Null => Vec::new(),
        single => parse_item(single).into_iter().collect(),
    }
}

fn parse_item(value: &Value) -> Option<MenuNode> {
    if let Some(package) = scalar_string(value) {
        if package.is_empty() {
            warn!("Skipping empty item");
            return None;
        }
        let action = Action::PackageInstall(package.clone());
        return Some(MenuNode::checkbox(package, true, action));
    }

    if !value.is_mapping() {
        warn!("Skipping item that is neither a scalar nor a mapping: {value:?}");
        return None;
    }

    let Some(name) = value
        .get("name")
        .and_then(scalar_string)
        .filter(|name| !name.is_empty())
    else {
        warn!("Skipping item without a `name`: {value:?}");
        return None;
    };

    let checked = value.get("enabled").map_or(true, parse_enabled);

    let commands = value.get("commands").map(scalar_list).unwrap_or_default();
    let action = if commands.is_empty() {
        Action::PackageInstall(name.clone())
    } else {
        Action::ShellScript(commands)
    };

    Some(MenuNode::checkbox(name, checked, action))
}

fn parse_enabled(value: &Value) -> bool {
    match value {
        Value::Bool(enabled) => *enabled,
        Value::String(enabled) => match enabled.to_lowercase().as_str() {
            "true" | "yes" | "on" | "y" => true,
            "false" | "no" | "off" | "n" => false,
            _ => {
                warn!("Unrecognised `enabled` value `{enabled}`, treating as enabled");
                true
            }
        },
        other => {
            warn!("Unrecognised `enabled` value {other:?}, treating as enabled");
            true
        }
    }
}

/// A scalar or a sequence of scalars, as an ordered list.
///
/// Empty and non-scalar entries are dropped.
fn scalar_list(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(entries) => entries
            .iter()
            .filter_map(scalar_string)
            .filter(|entry| !entry.is_empty())
            .collect(),
        single => scalar_string(single)
            .filter(|entry| !entry.is_empty())
            .into_iter()
            .collect(),
    }
}

/// The text of a scalar.
///
/// Numbers are re-rendered from their parsed value, so `1.10` becomes `1.1`
/// and `0x10` becomes `16`. Quote such names in the document to keep them
/// verbatim.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(string) => Some(string.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(boolean) => Some(boolean.to_string()),
        _ => None,
    }
}
