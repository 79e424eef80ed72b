//! Postinstall Core Library
//!
//! This crate provides the core functionality for postinstall, a tool that
//! lets a user pick which installation actions to run after a fresh
//! Arch-based install and turns the selection into a shell script.
//!
//! # Key Features
//!
//! - **Menu Definitions**: Parse a YAML document into a tree of sections and checkboxes
//! - **Navigation**: Terminal-independent cursor and toggle state machine over the tree
//! - **Action Collection**: Reduce the checked leaves to an ordered command list
//! - **Alias Substitution**: Swap `__MGR__` and `__NOTIFY__` tokens for configured invocations
//! - **Output**: Print, write or execute the resulting script
//!
//! # Examples
//!
//! ```
//! use postinstall_core::collector::collect_menu;
//! use postinstall_core::config::RenderConfig;
//! use postinstall_core::source::parse_document;
//! use postinstall_core::tree_builder::build_menu;
//!
//! let document = parse_document("sections: {core: {items: [vim]}}", "inline")?;
//! let menu = build_menu(&document, "inline")?;
//! let commands = collect_menu(&menu, &RenderConfig::default().with_aur_manager("yay"));
//! assert_eq!(commands, vec!["yay -S vim"]);
//! # Ok::<(), postinstall_core::error::Error>(())
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod execution;
pub mod menu_definitions;
pub mod navigation;
pub mod script;
pub mod source;
pub mod tree_builder;
