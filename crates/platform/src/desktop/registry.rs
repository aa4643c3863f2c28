use super::entry::{parse_desktop_file, DesktopEntry};
use super::icon_index::{extension, IconIndex};
use super::DesktopOptions;
use crate::error::{PlatformError, PlatformResult};
use crate::icon::IconRepresentation;
use crate::intent::{ComponentRef, Intent, PackageId};
use crate::traits::PackageRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Package registry backed by installed `.desktop` entries.
pub struct DesktopRegistry {
    application_dirs: Vec<PathBuf>,
    entries: RwLock<HashMap<String, DesktopEntry>>,
    icons: IconIndex,
}

impl DesktopRegistry {
    pub fn new(options: &DesktopOptions) -> Self {
        Self {
            application_dirs: options.application_dirs.clone(),
            entries: RwLock::new(HashMap::new()),
            icons: IconIndex::new(options.icon_dirs.clone()),
        }
    }

    /// Rescan application entries and icons. Returns the number of entries.
    pub fn refresh(&self) -> usize {
        let mut entries = HashMap::new();

        for dir in self.application_dirs.iter().filter(|dir| dir.exists()) {
            let walker = walkdir::WalkDir::new(dir).follow_links(true).max_depth(3);
            for file in walker.into_iter().filter_map(|e| e.ok()) {
                let path = file.path();
                if extension(path).as_deref() != Some("desktop") {
                    continue;
                }
                if let Some(entry) = parse_desktop_file(path) {
                    // First directory wins, matching XDG precedence.
                    entries.entry(entry.id.clone()).or_insert(entry);
                }
            }
        }

        self.icons.rebuild();

        let count = entries.len();
        *self.entries.write() = entries;
        info!(
            "Desktop registry loaded {} entries, {} icons",
            count,
            self.icons.len()
        );
        count
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up by exact id, then with the `.desktop` suffix added.
    fn entry(&self, id: &str) -> Option<DesktopEntry> {
        let entries = self.entries.read();
        entries
            .get(id)
            .or_else(|| entries.get(&format!("{id}.desktop")))
            .cloned()
    }

    fn require(&self, package: &PackageId) -> PlatformResult<DesktopEntry> {
        self.entry(package.as_str())
            .ok_or_else(|| PlatformError::NotFound(format!("package {package}")))
    }
}

fn millis_since_epoch(time: SystemTime) -> i64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

impl PackageRegistry for DesktopRegistry {
    fn first_install_time(&self, package: &PackageId) -> PlatformResult<i64> {
        let entry = self.require(package)?;
        let metadata = fs::metadata(&entry.path)?;
        // Not every filesystem records a birth time.
        let created = metadata.created().or_else(|_| metadata.modified())?;
        Ok(millis_since_epoch(created))
    }

    fn last_update_time(&self, package: &PackageId) -> PlatformResult<i64> {
        let entry = self.require(package)?;
        Ok(millis_since_epoch(fs::metadata(&entry.path)?.modified()?))
    }

    fn launch_intent(&self, package: &PackageId) -> PlatformResult<Option<Intent>> {
        Ok(self
            .entry(package.as_str())
            .filter(|entry| !entry.no_display && !entry.exec.is_empty())
            .map(|entry| Intent::LaunchPackage {
                package: PackageId::new(entry.id),
            }))
    }

    fn load_icon(&self, package: &PackageId) -> PlatformResult<IconRepresentation> {
        let entry = self.require(package)?;
        let name = entry
            .icon
            .ok_or_else(|| PlatformError::NotFound(format!("icon for {package}")))?;
        let path = self
            .icons
            .resolve(&name)
            .ok_or_else(|| PlatformError::NotFound(format!("icon file for {name}")))?;

        match extension(&path).as_deref() {
            Some("svg") | Some("svgz") | Some("xpm") | None => {
                let kind = extension(&path).unwrap_or_else(|| "unknown".to_string());
                debug!("Icon {} has no raster path ({})", path.display(), kind);
                Ok(IconRepresentation::Other(kind))
            }
            Some(_) => Ok(IconRepresentation::Bitmap(image::open(&path)?.into_rgba8())),
        }
    }

    /// Desktop entries carry no activity classes, so a component resolves
    /// when its package names an installed entry, whatever its class.
    fn activity_info(&self, component: &ComponentRef) -> PlatformResult<()> {
        self.entry(&component.package)
            .map(|_| ())
            .ok_or_else(|| PlatformError::NotFound(format!("activity {component}")))
    }
}
