//! OS-visible launcher actions.
//!
//! Everything except the clock is best effort: one attempt, faults logged
//! and swallowed.

pub mod clock;
pub mod search;

use crate::config::SearchConfig;
use crate::error::BridgeError;
use clock::{find_clock, ClockImplementation, CLOCK_IMPLEMENTATIONS};
use mini_launcher_platform::{
    ActivityLauncher, Intent, NotificationShade, PackageRegistry, PlatformServices, SettingsPanel,
};
use std::sync::Arc;
use tracing::{info, warn};

pub const GOOGLE_SEARCH_PACKAGE: &str = "com.google.android.googlequicksearchbox";
pub const PLAY_STORE_PACKAGE: &str = "com.android.vending";

pub struct ActionDispatcher {
    registry: Arc<dyn PackageRegistry>,
    launcher: Arc<dyn ActivityLauncher>,
    shade: Arc<dyn NotificationShade>,
    search: SearchConfig,
    clocks: &'static [ClockImplementation],
}

impl ActionDispatcher {
    pub fn new(services: &PlatformServices, search: SearchConfig) -> Self {
        Self {
            registry: Arc::clone(&services.registry),
            launcher: Arc::clone(&services.launcher),
            shade: Arc::clone(&services.shade),
            search,
            clocks: CLOCK_IMPLEMENTATIONS,
        }
    }

    fn start_best_effort(&self, intent: Intent) {
        if let Err(e) = self.launcher.start(&intent) {
            warn!("Failed to start {:?}: {}", intent, e);
        }
    }

    pub fn expand_notifications(&self) {
        if let Err(e) = self.shade.expand() {
            warn!("Failed to expand notifications: {}", e);
        }
    }

    /// Open the home-app chooser, or general settings where the platform
    /// has no home-settings screen.
    pub fn change_launcher(&self) {
        let home = Intent::Settings {
            panel: SettingsPanel::Home,
        };
        match self.launcher.start(&home) {
            Ok(()) => {}
            Err(e) if e.is_unsupported() => {
                info!("Home settings unavailable ({}), opening general settings", e);
                self.start_best_effort(Intent::Settings {
                    panel: SettingsPanel::General,
                });
            }
            Err(e) => warn!("Failed to open home settings: {}", e),
        }
    }

    /// Start the first installed clock app from the known table.
    pub fn open_clock(&self) -> Result<(), BridgeError> {
        let component = match find_clock(self.clocks, self.registry.as_ref()) {
            Ok(Some(component)) => component,
            Ok(None) => return Err(BridgeError::Unavailable("Clock app not found".into())),
            Err(e) => {
                warn!("Clock lookup failed: {}", e);
                return Err(BridgeError::Unavailable("Clock app lookup failed".into()));
            }
        };

        // A start failure is final; other table entries are not tried.
        self.launcher
            .start(&Intent::StartComponent { component })
            .map_err(|e| {
                warn!("Failed to start clock app: {}", e);
                BridgeError::Unavailable("Could not open the clock app.".into())
            })
    }

    pub fn search_google(&self, query: &str) {
        self.start_best_effort(Intent::WebSearch {
            query: query.to_string(),
            package: GOOGLE_SEARCH_PACKAGE.to_string(),
        });
    }

    pub fn search_play_store(&self, query: &str) {
        let uri = search::store_search_url(&self.search, query);
        self.start_best_effort(Intent::view_in(uri, PLAY_STORE_PACKAGE));
    }

    pub fn search_default_browser(&self, input: &str) {
        self.start_best_effort(Intent::view(search::browser_target(&self.search, input)));
    }
}
