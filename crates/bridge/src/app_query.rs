//! Read-only application lookups plus the "open an app" action.

use crate::config::SearchConfig;
use crate::error::BridgeError;
use crate::icons::IconCache;
use mini_launcher_platform::{ActivityLauncher, Intent, PackageId, PackageRegistry};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct AppQueryService {
    registry: Arc<dyn PackageRegistry>,
    launcher: Arc<dyn ActivityLauncher>,
    icons: Arc<IconCache>,
    storefront_template: String,
}

impl AppQueryService {
    pub fn new(
        registry: Arc<dyn PackageRegistry>,
        launcher: Arc<dyn ActivityLauncher>,
        icons: Arc<IconCache>,
        search: &SearchConfig,
    ) -> Self {
        Self {
            registry,
            launcher,
            icons,
            storefront_template: search.storefront_template.clone(),
        }
    }

    /// First install time in milliseconds, `None` for unknown packages.
    pub fn install_time(&self, package: &PackageId) -> Result<Option<i64>, BridgeError> {
        match self.registry.first_install_time(package) {
            Ok(millis) => Ok(Some(millis)),
            Err(e) if e.is_not_found() => {
                debug!("Install time lookup: {}", e);
                Ok(None)
            }
            Err(e) => {
                warn!("Install time lookup for {} failed: {}", package, e);
                Err(BridgeError::Unavailable(format!(
                    "Could not read install time for {package}"
                )))
            }
        }
    }

    /// Whether the registry has a launch entry point for the package.
    /// Registry faults count as "no".
    pub fn can_launch(&self, package: &PackageId) -> bool {
        match self.registry.launch_intent(package) {
            Ok(intent) => intent.is_some(),
            Err(e) => {
                debug!("Launch lookup for {} failed: {}", package, e);
                false
            }
        }
    }

    pub async fn icon_path(&self, package: &PackageId) -> Option<PathBuf> {
        self.icons.icon_path(package).await
    }

    /// Storefront listing URI for a package. The id is inserted verbatim
    /// so the listing names exactly the requested package.
    pub fn storefront_uri(&self, package: &PackageId) -> String {
        self.storefront_template.replace("{package}", package.as_str())
    }

    /// Launch the package, or open its storefront listing when it has no
    /// launch entry point. Faults are logged and swallowed.
    pub fn launch(&self, package: &PackageId) {
        let intent = match self.registry.launch_intent(package) {
            Ok(Some(intent)) => intent,
            Ok(None) => {
                info!("{} is not launchable, opening its store listing", package);
                Intent::view(self.storefront_uri(package))
            }
            Err(e) => {
                warn!("Launch lookup for {} failed: {}", package, e);
                return;
            }
        };

        if let Err(e) = self.launcher.start(&intent) {
            warn!("Failed to start {:?}: {}", intent, e);
        }
    }
}
