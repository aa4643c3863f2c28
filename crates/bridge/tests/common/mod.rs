#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use mini_launcher_bridge::{BridgeConfig, CommandBridge};
use mini_launcher_platform::*;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy)]
pub enum MockIcon {
    Bitmap,
    Layered,
    Vector,
}

#[derive(Clone)]
pub struct MockPackage {
    pub installed_at: i64,
    pub updated_at: i64,
    pub launchable: bool,
    pub icon: MockIcon,
}

impl MockPackage {
    pub fn launchable(installed_at: i64) -> Self {
        Self {
            installed_at,
            updated_at: installed_at,
            launchable: true,
            icon: MockIcon::Bitmap,
        }
    }

    pub fn with_icon(mut self, icon: MockIcon) -> Self {
        self.icon = icon;
        self
    }
}

/// In-memory registry that records every call it receives.
#[derive(Default)]
pub struct MockRegistry {
    pub packages: Mutex<HashMap<String, MockPackage>>,
    pub components: HashSet<ComponentRef>,
    pub probed: Mutex<Vec<ComponentRef>>,
    pub icon_loads: AtomicUsize,
    pub calls: AtomicUsize,
    pub broken: bool,
}

impl MockRegistry {
    pub fn with_package(self, id: &str, package: MockPackage) -> Self {
        self.packages.lock().insert(id.to_string(), package);
        self
    }

    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.components.insert(component);
        self
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn icon_loads(&self) -> usize {
        self.icon_loads.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_updated_at(&self, id: &str, updated_at: i64) {
        if let Some(package) = self.packages.lock().get_mut(id) {
            package.updated_at = updated_at;
        }
    }

    fn package(&self, id: &PackageId) -> PlatformResult<MockPackage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            return Err(offline());
        }
        self.packages
            .lock()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| PlatformError::NotFound(format!("package {id}")))
    }
}

fn offline() -> PlatformError {
    PlatformError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        "registry offline",
    ))
}

pub fn red_bitmap() -> RgbaImage {
    RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]))
}

impl PackageRegistry for MockRegistry {
    fn first_install_time(&self, package: &PackageId) -> PlatformResult<i64> {
        Ok(self.package(package)?.installed_at)
    }

    fn last_update_time(&self, package: &PackageId) -> PlatformResult<i64> {
        Ok(self.package(package)?.updated_at)
    }

    fn launch_intent(&self, package: &PackageId) -> PlatformResult<Option<Intent>> {
        match self.package(package) {
            Ok(found) if found.launchable => Ok(Some(Intent::LaunchPackage {
                package: package.clone(),
            })),
            Ok(_) => Ok(None),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn load_icon(&self, package: &PackageId) -> PlatformResult<IconRepresentation> {
        let found = self.package(package)?;
        self.icon_loads.fetch_add(1, Ordering::SeqCst);
        Ok(match found.icon {
            MockIcon::Bitmap => IconRepresentation::Bitmap(red_bitmap()),
            MockIcon::Layered => {
                let background = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255]));
                let mut foreground = RgbaImage::new(8, 8);
                foreground.put_pixel(4, 4, Rgba([0, 255, 0, 255]));
                IconRepresentation::Layered(Box::new(AdaptiveIcon::new(background, foreground)))
            }
            MockIcon::Vector => IconRepresentation::Other("vector".to_string()),
        })
    }

    fn activity_info(&self, component: &ComponentRef) -> PlatformResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.probed.lock().push(component.clone());
        if self.broken {
            return Err(offline());
        }
        if self.components.contains(component) {
            Ok(())
        } else {
            Err(PlatformError::NotFound(component.to_string()))
        }
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    pub started: Mutex<Vec<Intent>>,
    pub fail_all: bool,
    pub unsupported_home: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn without_home_settings() -> Self {
        Self {
            unsupported_home: true,
            ..Self::default()
        }
    }

    pub fn started(&self) -> Vec<Intent> {
        self.started.lock().clone()
    }
}

impl ActivityLauncher for RecordingLauncher {
    fn start(&self, intent: &Intent) -> PlatformResult<()> {
        if self.fail_all {
            return Err(PlatformError::LaunchFailed("activity refused".into()));
        }
        if self.unsupported_home
            && *intent
                == (Intent::Settings {
                    panel: SettingsPanel::Home,
                })
        {
            return Err(PlatformError::Unsupported("home settings".into()));
        }
        self.started.lock().push(intent.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingShade {
    pub expanded: AtomicUsize,
}

impl NotificationShade for RecordingShade {
    fn expand(&self) -> PlatformResult<()> {
        self.expanded.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct Harness {
    pub bridge: CommandBridge,
    pub registry: Arc<MockRegistry>,
    pub launcher: Arc<RecordingLauncher>,
    pub shade: Arc<RecordingShade>,
}

impl Harness {
    pub fn new(registry: MockRegistry, launcher: RecordingLauncher, cache_dir: &Path) -> Self {
        Self::with_config(registry, launcher, BridgeConfig::new(cache_dir))
    }

    pub fn with_config(
        registry: MockRegistry,
        launcher: RecordingLauncher,
        config: BridgeConfig,
    ) -> Self {
        let registry = Arc::new(registry);
        let launcher = Arc::new(launcher);
        let shade = Arc::new(RecordingShade::default());
        let services = PlatformServices::new(registry.clone(), launcher.clone(), shade.clone());
        Self {
            bridge: CommandBridge::from_platform(services, &config),
            registry,
            launcher,
            shade,
        }
    }

    pub fn expanded(&self) -> usize {
        self.shade.expanded.load(Ordering::SeqCst)
    }
}
