use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const ICON_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "svg", "xpm"];

/// Icon name (lowercase, no extension) to file path.
pub struct IconIndex {
    dirs: Vec<PathBuf>,
    index: RwLock<HashMap<String, PathBuf>>,
}

impl IconIndex {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            index: RwLock::new(HashMap::new()),
        }
    }

    /// Rescan every icon directory. Earlier directories win, except that a
    /// PNG always replaces a non-PNG file of the same name.
    pub fn rebuild(&self) {
        let mut index: HashMap<String, PathBuf> = HashMap::new();

        for dir in self.dirs.iter().filter(|dir| dir.exists()) {
            let walker = walkdir::WalkDir::new(dir).follow_links(true).max_depth(10);
            for entry in walker.into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_dir() {
                    continue;
                }

                let path = entry.path();
                let Some(ext) = extension(path) else {
                    continue;
                };
                if !ICON_EXTENSIONS.contains(&ext.as_str()) {
                    continue;
                }
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                let key = stem.to_lowercase();
                let replace = match index.get(&key) {
                    None => true,
                    Some(existing) => ext == "png" && extension(existing).as_deref() != Some("png"),
                };
                if replace {
                    index.insert(key, path.to_path_buf());
                }
            }
        }

        debug!("Indexed {} icons", index.len());
        *self.index.write() = index;
    }

    /// Resolve an `Icon=` value: absolute paths are taken as-is, names go
    /// through the index.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.starts_with('/') {
            let path = PathBuf::from(name);
            return path.exists().then_some(path);
        }

        let index = self.index.read();
        let key = name.to_lowercase();
        index
            .get(&key)
            .or_else(|| index.get(&key.replace([' ', '_'], "-")))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
