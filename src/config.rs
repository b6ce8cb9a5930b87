use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::content::DEFAULT_INSTALL_COMMAND;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Text placed on the clipboard by the copy action.
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default)]
    pub toast: ToastConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default = "default_toast_text")]
    pub text: String,

    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    #[serde(default = "default_max_visible")]
    pub max_visible: usize,

    /// Also show a toast when the copy fails. Failures are always logged.
    #[serde(default)]
    pub notify_on_failure: bool,
}

fn default_theme() -> String {
    "gqty".to_string()
}

fn default_command() -> String {
    DEFAULT_INSTALL_COMMAND.to_string()
}

fn default_toast_text() -> String {
    "Copied to clipboard".to_string()
}

fn default_duration_ms() -> u64 {
    3000
}

fn default_max_visible() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            command: default_command(),
            toast: ToastConfig::default(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            text: default_toast_text(),
            duration_ms: default_duration_ms(),
            max_visible: default_max_visible(),
            notify_on_failure: false,
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "gqty");
        assert_eq!(config.command, "npx @gqty/cli");
        assert_eq!(config.toast.text, "Copied to clipboard");
        assert_eq!(config.toast.duration(), Duration::from_secs(3));
        assert!(!config.toast.notify_on_failure);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("command"));
        assert!(toml_str.contains("[toast]"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"
        theme = "light"

        [toast]
        notify_on_failure = true
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.command, "npx @gqty/cli");
        assert_eq!(
            config.toast,
            ToastConfig {
                notify_on_failure: true,
                ..ToastConfig::default()
            }
        );
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.command, Config::default().command);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "command = \"cargo add gqty\"\n[toast]\nduration_ms = 750\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.command, "cargo add gqty");
        assert_eq!(config.toast.duration(), Duration::from_millis(750));
    }

    #[test]
    fn test_load_from_invalid_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "theme = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
