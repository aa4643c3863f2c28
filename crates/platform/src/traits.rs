use crate::error::PlatformResult;
use crate::icon::IconRepresentation;
use crate::intent::{ComponentRef, Intent, PackageId};
use std::sync::Arc;

/// Read-only view of the installed-application registry.
pub trait PackageRegistry: Send + Sync {
    /// First install time, milliseconds since the Unix epoch.
    fn first_install_time(&self, package: &PackageId) -> PlatformResult<i64>;

    /// Last update time, milliseconds since the Unix epoch.
    fn last_update_time(&self, package: &PackageId) -> PlatformResult<i64>;

    /// Launch entry point for a package, `None` when it has none.
    fn launch_intent(&self, package: &PackageId) -> PlatformResult<Option<Intent>>;

    fn load_icon(&self, package: &PackageId) -> PlatformResult<IconRepresentation>;

    /// `Err(PlatformError::NotFound)` when no such activity is installed.
    fn activity_info(&self, component: &ComponentRef) -> PlatformResult<()>;
}

/// Starts activities. A successful return only means the start was initiated.
pub trait ActivityLauncher: Send + Sync {
    fn start(&self, intent: &Intent) -> PlatformResult<()>;
}

pub trait NotificationShade: Send + Sync {
    fn expand(&self) -> PlatformResult<()>;
}

/// The OS collaborators the bridge is wired against.
#[derive(Clone)]
pub struct PlatformServices {
    pub registry: Arc<dyn PackageRegistry>,
    pub launcher: Arc<dyn ActivityLauncher>,
    pub shade: Arc<dyn NotificationShade>,
}

impl PlatformServices {
    pub fn new(
        registry: Arc<dyn PackageRegistry>,
        launcher: Arc<dyn ActivityLauncher>,
        shade: Arc<dyn NotificationShade>,
    ) -> Self {
        Self {
            registry,
            launcher,
            shade,
        }
    }
}
