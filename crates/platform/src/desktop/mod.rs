//! Freedesktop implementation of the platform contracts.
//!
//! Package ids are desktop-entry ids (`firefox.desktop`). Launching goes
//! through `gtk-launch`, URIs through `xdg-open`, and the notification and
//! settings actions run whatever commands the host configures.

mod entry;
mod icon_index;
mod launcher;
mod registry;
mod shade;

pub use entry::{parse_desktop_file, DesktopEntry};
pub use icon_index::IconIndex;
pub use launcher::DesktopLauncher;
pub use registry::DesktopRegistry;
pub use shade::CommandShade;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WEB_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q={query}";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopOptions {
    pub application_dirs: Vec<PathBuf>,
    pub icon_dirs: Vec<PathBuf>,
    pub notification_command: Option<Vec<String>>,
    pub home_settings_command: Option<Vec<String>>,
    pub settings_command: Option<Vec<String>>,
    /// Used for web-search intents; `{query}` is replaced by the encoded query.
    /// Not read from config: the host sets it from its search settings.
    #[serde(skip)]
    pub web_search_template: String,
}

impl Default for DesktopOptions {
    fn default() -> Self {
        Self {
            application_dirs: default_application_dirs(),
            icon_dirs: default_icon_dirs(),
            notification_command: None,
            home_settings_command: None,
            settings_command: None,
            web_search_template: DEFAULT_WEB_SEARCH_TEMPLATE.to_string(),
        }
    }
}

fn data_dirs() -> (String, Vec<String>) {
    let home = std::env::var("HOME").unwrap_or_default();
    let data_home =
        std::env::var("XDG_DATA_HOME").unwrap_or_else(|_| format!("{}/.local/share", home));
    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());

    let system = data_dirs
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(String::from)
        .collect();
    (data_home, system)
}

/// XDG application directories, user first.
pub fn default_application_dirs() -> Vec<PathBuf> {
    let (data_home, system) = data_dirs();
    let home = std::env::var("HOME").unwrap_or_default();

    let mut dirs = vec![PathBuf::from(&data_home).join("applications")];
    dirs.extend(system.iter().map(|dir| PathBuf::from(dir).join("applications")));
    dirs.push(PathBuf::from("/var/lib/flatpak/exports/share/applications"));
    dirs.push(PathBuf::from(&home).join(".local/share/flatpak/exports/share/applications"));
    dirs
}

/// XDG icon directories plus pixmaps, user first.
pub fn default_icon_dirs() -> Vec<PathBuf> {
    let (data_home, system) = data_dirs();
    let home = std::env::var("HOME").unwrap_or_default();

    let mut dirs = vec![
        PathBuf::from(&data_home).join("icons"),
        PathBuf::from(&home).join(".icons"),
    ];
    for dir in &system {
        dirs.push(PathBuf::from(dir).join("icons"));
        dirs.push(PathBuf::from(dir).join("pixmaps"));
    }
    dirs.push(PathBuf::from("/var/lib/flatpak/exports/share/icons"));
    dirs
}
