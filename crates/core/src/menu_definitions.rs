use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::config::RenderConfig;

/// A unit of work attached to a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Install one AUR package through the configured manager.
    PackageInstall(String),
    /// Run a list of shell commands, chained with `&&`.
    ShellScript(Vec<String>),
}

impl Action {
    /// Renders the action as a single shell command line.
    pub fn render(&self, config: &RenderConfig) -> String {
        match self {
            Action::PackageInstall(name) => format!("{} -S {}", config.aur_manager, name),
            Action::ShellScript(commands) => {
                // Aliases are replaced on the joined string, not per command
                config.substitute_aliases(&commands.iter().join(" && "))
            }
        }
    }
}

/// What a [`MenuNode`] is, together with the data only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Checkbox { checked: bool, action: Action },
    Section { children: Vec<MenuNode> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub label: String,
    pub kind: NodeKind,
}

impl MenuNode {
    pub fn checkbox(label: impl Into<String>, checked: bool, action: Action) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Checkbox { checked, action },
        }
    }

    pub fn section(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Section { children },
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self.kind, NodeKind::Section { .. })
    }

    /// `Some(checked)` for checkboxes, `None` for sections.
    pub fn checked(&self) -> Option<bool> {
        match &self.kind {
            NodeKind::Checkbox { checked, .. } => Some(*checked),
            NodeKind::Section { .. } => None,
        }
    }

    pub fn action(&self) -> Option<&Action> {
        match &self.kind {
            NodeKind::Checkbox { action, .. } => Some(action),
            NodeKind::Section { .. } => None,
        }
    }

    /// Children of a section; always empty for a checkbox.
    pub fn children(&self) -> &[MenuNode] {
        match &self.kind {
            NodeKind::Checkbox { .. } => &[],
            NodeKind::Section { children } => children,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<MenuNode>> {
        match &mut self.kind {
            NodeKind::Checkbox { .. } => None,
            NodeKind::Section { children } => Some(children),
        }
    }

    /// Flips a checkbox. Returns `false` (and does nothing) for a section.
    pub fn toggle(&mut self) -> bool {
        match &mut self.kind {
            NodeKind::Checkbox { checked, .. } => {
                *checked = !*checked;
                true
            }
            NodeKind::Section { .. } => false,
        }
    }
}

impl Display for MenuNode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Checkbox { checked: true, .. } => write!(formatter, "[x] {}", self.label),
            NodeKind::Checkbox { checked: false, .. } => write!(formatter, "[ ] {}", self.label),
            NodeKind::Section { .. } => write!(formatter, "-> {}", self.label),
        }
    }
}

/// Everything parsed from a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDefinition {
    /// One node per top-level section, in document order.
    pub forest: Vec<MenuNode>,
    /// Commands appended after the selected actions, always.
    pub after: Vec<String>,
}
