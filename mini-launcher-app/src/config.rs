use anyhow::{bail, Context, Result};
use mini_launcher_bridge::{BridgeConfig, IconCacheConfig, SearchConfig};
use mini_launcher_platform::desktop::DesktopOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "MINI_LAUNCHER_CONFIG";
const APP_DIR: &str = "mini-launcher";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Where rendered icons are written. Defaults to the user cache dir.
    pub cache_dir: Option<PathBuf>,
    pub search: SearchConfig,
    pub icons: IconCacheConfig,
    pub desktop: DesktopOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            cache_dir: None,
            search: SearchConfig::default(),
            icons: IconCacheConfig::default(),
            desktop: DesktopOptions::default(),
        }
    }
}

impl Config {
    /// Config file location: explicit path, then `MINI_LAUNCHER_CONFIG`,
    /// then `<config dir>/mini-launcher/config.yaml`.
    pub fn path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.yaml")
    }

    pub fn exists(path: &Path) -> bool {
        path.is_file()
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if Self::exists(path) {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            bail!("log_level cannot be empty");
        }
        if let Some(dir) = &self.cache_dir {
            if dir.as_os_str().is_empty() {
                bail!("cache_dir cannot be empty");
            }
        }
        if let Err(e) = self.search.validate() {
            bail!("Invalid search config: {}", e);
        }

        let commands = [
            ("notification_command", &self.desktop.notification_command),
            ("home_settings_command", &self.desktop.home_settings_command),
            ("settings_command", &self.desktop.settings_command),
        ];
        for (field, command) in commands {
            if let Some(argv) = command {
                if argv.first().map_or(true, |program| program.trim().is_empty()) {
                    bail!("desktop.{} must name a program", field);
                }
            }
        }
        Ok(())
    }

    pub fn resolved_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("icons")
        })
    }

    pub fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            cache_dir: self.resolved_cache_dir(),
            search: self.search.clone(),
            icons: self.icons.clone(),
        }
    }

    /// Desktop backend options, sharing the bridge's web search template.
    pub fn desktop_options(&self) -> DesktopOptions {
        DesktopOptions {
            web_search_template: self.search.web_search_template.clone(),
            ..self.desktop.clone()
        }
    }
}
