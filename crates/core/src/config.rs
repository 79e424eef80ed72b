//! Render configuration and path utilities.
//!
//! The AUR manager invocation and the notification command are substituted
//! into shell scripts at render time. They live in [`RenderConfig`] so that
//! callers (and tests) can swap them out.

/// Invocation used for `PackageInstall` actions and the manager alias.
pub const DEFAULT_AUR_MANAGER: &str = "yay --noconfirm --answerdiff=None --answeredit=None";
/// Token replaced by the AUR manager invocation inside shell scripts.
pub const DEFAULT_AUR_MANAGER_ALIAS: &str = "__MGR__";

/// Invocation used for the notification alias.
pub const DEFAULT_NOTIFY_COMMAND: &str = "notify-send -i dialog-information -t 5000 -u critical";
/// Token replaced by the notification invocation inside shell scripts.
pub const DEFAULT_NOTIFY_ALIAS: &str = "__NOTIFY__";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Strings substituted into rendered actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub aur_manager: String,
    pub aur_manager_alias: String,
    pub notify_command: String,
    pub notify_alias: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aur_manager: DEFAULT_AUR_MANAGER.to_string(),
            aur_manager_alias: DEFAULT_AUR_MANAGER_ALIAS.to_string(),
            notify_command: DEFAULT_NOTIFY_COMMAND.to_string(),
            notify_alias: DEFAULT_NOTIFY_ALIAS.to_string(),
        }
    }
}

impl RenderConfig {
    /// Replaces the AUR manager invocation, keeping the alias token.
    #[must_use]
    pub fn with_aur_manager(mut self, aur_manager: impl Into<String>) -> Self {
        self.aur_manager = aur_manager.into();
        self
    }

    /// Replaces the notification invocation, keeping the alias token.
    #[must_use]
    pub fn with_notify_command(mut self, notify_command: impl Into<String>) -> Self {
        self.notify_command = notify_command.into();
        self
    }

    /// Applies both alias substitutions to an already joined script.
    pub fn substitute_aliases(&self, script: &str) -> String {
        script
            .replace(&self.aur_manager_alias, &self.aur_manager)
            .replace(&self.notify_alias, &self.notify_command)
    }
}

/// Expands shell variables like `~` in a local path.
///
/// # Examples
///
/// ```
/// use postinstall_core::config::expand_path;
///
/// let expanded = expand_path("~/packages.yml");
/// assert!(!expanded.starts_with('~'));
/// ```
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_render_config() {
        let config = RenderConfig::default();
        assert_eq!(config.aur_manager, DEFAULT_AUR_MANAGER);
        assert_eq!(config.aur_manager_alias, "__MGR__");
        assert_eq!(config.notify_command, DEFAULT_NOTIFY_COMMAND);
        assert_eq!(config.notify_alias, "__NOTIFY__");
    }

    #[test]
    fn test_overrides_keep_aliases() {
        let config = RenderConfig::default()
            .with_aur_manager("paru")
            .with_notify_command("echo");
        assert_eq!(config.aur_manager, "paru");
        assert_eq!(config.notify_command, "echo");
        assert_eq!(config.aur_manager_alias, DEFAULT_AUR_MANAGER_ALIAS);
        assert_eq!(config.notify_alias, DEFAULT_NOTIFY_ALIAS);
    }

    #[test]
    fn test_substitute_aliases_replaces_every_occurrence() {
        let config = RenderConfig::default()
            .with_aur_manager("mgr")
            .with_notify_command("notify");
        let script = "__MGR__ -S a && __MGR__ -S b && __NOTIFY__ done";
        assert_eq!(
            config.substitute_aliases(script),
            "mgr -S a && mgr -S b && notify done"
        );
    }

    #[test]
    fn test_substitute_aliases_without_tokens() {
        let config = RenderConfig::default();
        assert_eq!(config.substitute_aliases("echo hi"), "echo hi");
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let result = expand_path("~/my-config.yml");
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-config.yml"));
    }

    #[test]
    fn test_expand_path_absolute() {
        assert_eq!(expand_path("/absolute/path.yml"), "/absolute/path.yml");
    }

    #[test]
    fn test_default_shell_constant() {
        assert_eq!(DEFAULT_SHELL, "/bin/bash");
    }
}
