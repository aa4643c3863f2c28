//! Icon rendering and the file-backed icon cache.

mod cache;
mod locks;
mod renderer;

pub use cache::{cache_file_name, IconCache, ICON_FILE_EXTENSION, ICON_FILE_PREFIX};
pub use locks::{KeyGuard, KeyedLocks};
pub use renderer::{encode_png, IconRenderer};
