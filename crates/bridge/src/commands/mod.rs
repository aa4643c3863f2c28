pub mod actions;
pub mod app_query;
pub mod base;

pub use actions::{
    ChangeLauncher, ExpandNotifications, SearchDefaultBrowser, SearchGoogle, SearchPlayStore,
    ShowClock,
};
pub use app_query::{CanLaunchApp, GetAppIconPath, GetAppInstallTime, OpenApp};
pub use base::{CommandHandler, PACKAGE_NAME, QUERY};
