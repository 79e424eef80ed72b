//! Reduces a navigated menu to the final command list.

use crate::config::RenderConfig;
use crate::menu_definitions::{MenuDefinition, MenuNode, NodeKind};

/// Renders every checked checkbox, depth-first in document order, then
/// appends the trailing commands verbatim.
pub fn collect_commands(
    forest: &[MenuNode],
    after: &[String],
    config: &RenderConfig,
) -> Vec<String> {
    let mut commands = Vec::new();
    collect_into(forest, config, &mut commands);
    commands.extend(after.iter().cloned());
    commands
}

/// Shorthand for [`collect_commands`] on a whole [`MenuDefinition`].
pub fn collect_menu(menu: &MenuDefinition, config: &RenderConfig) -> Vec<String> {
    collect_commands(&menu.forest, &menu.after, config)
}

fn collect_into(nodes: &[MenuNode], config: &RenderConfig, commands: &mut Vec<String>) {
    for node in nodes {
        match &node.kind {
            NodeKind::Checkbox {
                checked: true,
                action,
            } => commands.push(action.render(config)),
            NodeKind::Checkbox { checked: false, .. } => {}
            NodeKind::Section { children } => collect_into(children, config, commands),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_definitions::Action;

    fn package(name: &str, checked: bool) -> MenuNode {
        MenuNode::checkbox(name, checked, Action::PackageInstall(name.to_string()))
    }

    fn config() -> RenderConfig {
        RenderConfig::default().with_aur_manager("mgr")
    }

    #[test]
    fn test_collects_checked_in_document_order() {
        let forest = vec![
            MenuNode::section(
                "core",
                vec![
                    package("vim", true),
                    MenuNode::section("nested", vec![package("git", true)]),
                    package("htop", true),
                ],
            ),
            MenuNode::section("extra", vec![package("zsh", true)]),
        ];

        let commands = collect_commands(&forest, &[], &config());
        assert_eq!(
            commands,
            vec!["mgr -S vim", "mgr -S git", "mgr -S htop", "mgr -S zsh"]
        );
    }

    #[test]
    fn test_unchecked_contribute_nothing() {
        let forest = vec![MenuNode::section(
            "core",
            vec![package("vim", false), package("git", true)],
        )];
        assert_eq!(collect_commands(&forest, &[], &config()), vec!["mgr -S git"]);
    }

    #[test]
    fn test_after_commands_are_appended() {
        let forest = vec![MenuNode::section("core", vec![package("vim", true)])];
        let after = vec!["echo one".to_string(), "__MGR__ -Syu".to_string()];

        // Trailing commands are not alias-substituted
        assert_eq!(
            collect_commands(&forest, &after, &config()),
            vec!["mgr -S vim", "echo one", "__MGR__ -Syu"]
        );
    }

    #[test]
    fn test_all_unchecked_yields_only_after() {
        let forest = vec![MenuNode::section(
            "core",
            vec![package("vim", false), package("git", false)],
        )];
        let after = vec!["echo done".to_string()];
        assert_eq!(collect_commands(&forest, &after, &config()), vec!["echo done"]);
    }

    #[test]
    fn test_empty_forest() {
        assert!(collect_commands(&[], &[], &config()).is_empty());
    }

    #[test]
    fn test_collect_menu() {
        let menu = MenuDefinition {
            forest: vec![MenuNode::section("core", vec![package("vim", true)])],
            after: vec!["echo done".to_string()],
        };
        assert_eq!(collect_menu(&menu, &config()), vec!["mgr -S vim", "echo done"]);
    }
}
