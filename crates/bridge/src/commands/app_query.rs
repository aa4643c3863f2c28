//! Handlers backed by [`AppQueryService`].

use super::base::{CommandHandler, PACKAGE_NAME};
use crate::app_query::AppQueryService;
use crate::error::BridgeError;
use crate::result::{required_str, Arguments};
use async_trait::async_trait;
use mini_launcher_platform::PackageId;
use serde_json::{json, Value};
use std::sync::Arc;

fn package_arg(args: &Arguments) -> Result<PackageId, BridgeError> {
    required_str(args, PACKAGE_NAME).map(PackageId::from)
}

pub struct GetAppInstallTime(pub Arc<AppQueryService>);
pub struct CanLaunchApp(pub Arc<AppQueryService>);
pub struct GetAppIconPath(pub Arc<AppQueryService>);
pub struct OpenApp(pub Arc<AppQueryService>);

#[async_trait]
impl CommandHandler for GetAppInstallTime {
    fn name(&self) -> &'static str {
        "getAppInstallTime"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[PACKAGE_NAME]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        let package = package_arg(&args)?;
        match self.0.install_time(&package)? {
            Some(millis) => Ok(Some(json!(millis))),
            None => Err(BridgeError::NotFound(format!("package {package}"))),
        }
    }
}

#[async_trait]
impl CommandHandler for CanLaunchApp {
    fn name(&self) -> &'static str {
        "canLaunchApp"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[PACKAGE_NAME]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        let package = package_arg(&args)?;
        Ok(Some(json!(self.0.can_launch(&package))))
    }
}

#[async_trait]
impl CommandHandler for GetAppIconPath {
    fn name(&self) -> &'static str {
        "getAppIconPath"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[PACKAGE_NAME]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        let package = package_arg(&args)?;
        let path = self.0.icon_path(&package).await;
        Ok(path.map(|p| json!(p.to_string_lossy())))
    }
}

#[async_trait]
impl CommandHandler for OpenApp {
    fn name(&self) -> &'static str {
        "openApp"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[PACKAGE_NAME]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        let package = package_arg(&args)?;
        self.0.launch(&package);
        Ok(None)
    }
}
