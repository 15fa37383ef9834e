//! XDG config store adapter

use std::env;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Environment variable that points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "CB2F_CONFIG";

/// XDG-compliant config store
///
/// Without a config or home directory there is no file: loading yields an
/// empty config and writing fails.
pub struct XdgConfigStore {
    path: Option<PathBuf>,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path.
    ///
    /// `CB2F_CONFIG` overrides the location when set.
    pub fn new() -> Self {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Self::with_path(path);
        }

        Self {
            path: Self::default_path(dirs::config_dir(), dirs::home_dir()),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `<config dir>/cb2f/config.toml`, falling back to `~/.config`
    fn default_path(config_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
        config_dir
            .or_else(|| home_dir.map(|home| home.join(".config")))
            .map(|dir| dir.join("cb2f").join("config.toml"))
    }

    fn file(&self) -> Result<&Path, ConfigError> {
        self.path.as_deref().ok_or_else(|| {
            ConfigError::WriteError(format!(
                "no config or home directory found; set {} to choose a file",
                CONFIG_PATH_ENV
            ))
        })
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize AppConfig to TOML
    fn to_toml(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config)
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = self.path.as_deref().filter(|p| p.exists()) else {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        };

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let path = self.file()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(config)?;

        fs::write(path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_default()
    }

    fn exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::exists)
    }

    async fn init(&self) -> Result<(), ConfigError> {
        let path = self.file()?;
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_string_lossy().to_string()));
        }

        let defaults = AppConfig::defaults();
        self.save(&defaults).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("cb2f"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn home_dir_is_the_fallback() {
        let path = XdgConfigStore::default_path(None, Some(PathBuf::from("/home/u")));
        assert_eq!(path, Some(PathBuf::from("/home/u/.config/cb2f/config.toml")));

        let path = XdgConfigStore::default_path(
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(path, Some(PathBuf::from("/xdg/cb2f/config.toml")));
    }

    #[tokio::test]
    async fn without_any_directory_nothing_is_written() {
        assert_eq!(XdgConfigStore::default_path(None, None), None);

        let store = XdgConfigStore { path: None };
        assert!(!store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
        assert!(matches!(store.init().await, Err(ConfigError::WriteError(_))));
        assert!(matches!(
            store.save(&AppConfig::defaults()).await,
            Err(ConfigError::WriteError(_))
        ));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
output_dir = "~/Pictures"
clipboard_tool = "xclip"
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.output_dir, Some("~/Pictures".to_string()));
        assert_eq!(config.clipboard_tool, Some("xclip".to_string()));
    }

    #[test]
    fn parse_toml_partial() {
        let config = XdgConfigStore::parse_toml("clipboard_tool = \"auto\"").unwrap();
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn parse_toml_invalid() {
        let err = XdgConfigStore::parse_toml("output_dir = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn to_toml_round_trip() {
        let config = AppConfig {
            output_dir: Some("/tmp/shots".to_string()),
            clipboard_tool: Some("wl-paste".to_string()),
        };

        let toml = XdgConfigStore::to_toml(&config).unwrap();
        let parsed = XdgConfigStore::parse_toml(&toml).unwrap();

        assert_eq!(config, parsed);
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(store.load().await.unwrap(), AppConfig::empty());
    }

    #[tokio::test]
    async fn init_then_init_again_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.init().await.unwrap();
        assert!(store.exists());
        assert_eq!(store.load().await.unwrap(), AppConfig::defaults());

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }
}
