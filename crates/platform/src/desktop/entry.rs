use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The parts of a `.desktop` file the registry needs.
#[derive(Clone, Debug)]
pub struct DesktopEntry {
    pub id: String,
    pub name: String,
    pub exec: String,
    pub icon: Option<String>,
    pub no_display: bool,
    pub path: PathBuf,
}

/// Parse the `[Desktop Entry]` group of an application entry.
///
/// Returns `None` for unreadable files, non-application entries, and
/// entries missing `Name` or `Exec`.
pub fn parse_desktop_file(path: &Path) -> Option<DesktopEntry> {
    let content = fs::read_to_string(path).ok()?;
    let mut fields = HashMap::new();
    let mut in_desktop_entry = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_desktop_entry = line == "[Desktop Entry]";
            continue;
        }

        if in_desktop_entry {
            if let Some((key, value)) = line.split_once('=') {
                fields
                    .entry(key.trim().to_string())
                    .or_insert_with(|| value.trim().to_string());
            }
        }
    }

    if fields.get("Type").map(String::as_str) != Some("Application") {
        return None;
    }

    let flag = |key: &str| fields.get(key).map(|v| v == "true").unwrap_or(false);

    Some(DesktopEntry {
        id: path.file_name()?.to_string_lossy().to_string(),
        name: fields.get("Name")?.clone(),
        exec: fields.get("Exec")?.clone(),
        icon: fields.get("Icon").filter(|s| !s.is_empty()).cloned(),
        no_display: flag("NoDisplay") || flag("Hidden"),
        path: path.to_path_buf(),
    })
}
