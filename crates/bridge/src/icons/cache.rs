use super::locks::KeyedLocks;
use super::renderer::IconRenderer;
use crate::config::IconCacheConfig;
use mini_launcher_platform::{PackageId, PackageRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

pub const ICON_FILE_PREFIX: &str = "icon_";
pub const ICON_FILE_EXTENSION: &str = "png";

/// File name of a package's cached icon, `None` when the id cannot name a
/// file inside the cache directory.
pub fn cache_file_name(package: &PackageId) -> Option<String> {
    let id = package.as_str();
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\', '\0']) {
        return None;
    }
    Some(format!("{ICON_FILE_PREFIX}{id}.{ICON_FILE_EXTENSION}"))
}

/// Presence-based icon cache: one PNG per package in a single directory.
///
/// "Check, else render and write" runs under a per-package lock, so each
/// package has at most one writer. Files are written to a temp name and
/// renamed into place; readers never see a partial icon. Failed renders
/// are not remembered, so the next request tries again.
pub struct IconCache {
    dir: PathBuf,
    renderer: IconRenderer,
    registry: Arc<dyn PackageRegistry>,
    locks: KeyedLocks,
    revalidate_on_update: bool,
}

impl IconCache {
    pub fn new(
        dir: impl Into<PathBuf>,
        registry: Arc<dyn PackageRegistry>,
        config: &IconCacheConfig,
    ) -> Self {
        Self {
            dir: dir.into(),
            renderer: IconRenderer::new(Arc::clone(&registry)),
            registry,
            locks: KeyedLocks::new(),
            revalidate_on_update: config.revalidate_on_update,
        }
    }

    pub fn path_for(&self, package: &PackageId) -> Option<PathBuf> {
        cache_file_name(package).map(|name| self.dir.join(name))
    }

    /// Path of the package's rendered icon, rendering it on a cache miss.
    pub async fn icon_path(&self, package: &PackageId) -> Option<PathBuf> {
        let Some(path) = self.path_for(package) else {
            warn!("Package id '{}' cannot name a cache file", package);
            return None;
        };

        let _guard = self.locks.lock(package.as_str()).await;

        if self.is_cached(package, &path).await {
            debug!("Icon cache hit for {}", package);
            return Some(path);
        }

        let renderer = self.renderer.clone();
        let target = package.clone();
        let bytes = match tokio::task::spawn_blocking(move || renderer.render_png(&target)).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!("Icon render for {} aborted: {}", package, e);
                return None;
            }
        };

        match write_atomic(&path, &bytes).await {
            Ok(()) => {
                info!("Cached icon for {} at {}", package, path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Failed to write icon for {}: {}", package, e);
                None
            }
        }
    }

    async fn is_cached(&self, package: &PackageId, path: &Path) -> bool {
        let metadata = match fs::metadata(path).await {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return false,
        };

        if !self.revalidate_on_update {
            return true;
        }

        let written = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as i64);

        match (written, self.registry.last_update_time(package)) {
            (Some(written), Ok(updated)) if updated > written => {
                debug!("Cached icon for {} predates its last update", package);
                false
            }
            _ => true,
        }
    }
}

async fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("png.tmp");
    let result = async {
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, path).await
    }
    .await;

    if result.is_err() {
        let _ = fs::remove_file(&temp_path).await;
    }
    result
}
