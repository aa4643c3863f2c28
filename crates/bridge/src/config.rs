use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use mini_launcher_platform::desktop::DEFAULT_WEB_SEARCH_TEMPLATE;
pub const DEFAULT_STORE_SEARCH_TEMPLATE: &str = "https://play.google.com/store/search?q={query}";
pub const DEFAULT_STOREFRONT_TEMPLATE: &str = "market://details?id={package}";
pub const DEFAULT_SCHEME: &str = "https";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Query URL for non-URL browser input; `{query}` is percent-encoded.
    pub web_search_template: String,
    pub store_search_template: String,
    /// Listing page opened when a package cannot be launched.
    pub storefront_template: String,
    /// Prefixed to URL-like input without an `http` scheme.
    pub default_scheme: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            web_search_template: DEFAULT_WEB_SEARCH_TEMPLATE.to_string(),
            store_search_template: DEFAULT_STORE_SEARCH_TEMPLATE.to_string(),
            storefront_template: DEFAULT_STOREFRONT_TEMPLATE.to_string(),
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), String> {
        let templates = [
            ("web_search_template", &self.web_search_template, "{query}"),
            ("store_search_template", &self.store_search_template, "{query}"),
            ("storefront_template", &self.storefront_template, "{package}"),
        ];
        for (field, template, placeholder) in templates {
            if !template.contains(placeholder) {
                return Err(format!("{field} must contain {placeholder}"));
            }
        }
        if self.default_scheme.trim().is_empty() {
            return Err("default_scheme cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconCacheConfig {
    /// Re-render a cached icon when the package was updated after the file
    /// was written. Off means a cached file is served for as long as it exists.
    pub revalidate_on_update: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    pub cache_dir: PathBuf,
    pub search: SearchConfig,
    pub icons: IconCacheConfig,
}

impl BridgeConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            search: SearchConfig::default(),
            icons: IconCacheConfig::default(),
        }
    }
}
