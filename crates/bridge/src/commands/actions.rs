//! Handlers backed by [`ActionDispatcher`].

use super::base::{CommandHandler, QUERY};
use crate::actions::ActionDispatcher;
use crate::error::BridgeError;
use crate::result::{required_str, Arguments};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct ExpandNotifications(pub Arc<ActionDispatcher>);
pub struct ChangeLauncher(pub Arc<ActionDispatcher>);
pub struct ShowClock(pub Arc<ActionDispatcher>);
pub struct SearchGoogle(pub Arc<ActionDispatcher>);
pub struct SearchPlayStore(pub Arc<ActionDispatcher>);
pub struct SearchDefaultBrowser(pub Arc<ActionDispatcher>);

#[async_trait]
impl CommandHandler for ExpandNotifications {
    fn name(&self) -> &'static str {
        "expandNotifications"
    }
    fn aliases(&self) -> &'static [&'static str] {
        &["expandNotis"]
    }
    async fn execute(&self, _args: Arguments) -> Result<Option<Value>, BridgeError> {
        self.0.expand_notifications();
        Ok(None)
    }
}

#[async_trait]
impl CommandHandler for ChangeLauncher {
    fn name(&self) -> &'static str {
        "changeLauncher"
    }
    async fn execute(&self, _args: Arguments) -> Result<Option<Value>, BridgeError> {
        self.0.change_launcher();
        Ok(None)
    }
}

#[async_trait]
impl CommandHandler for ShowClock {
    fn name(&self) -> &'static str {
        "showClock"
    }
    async fn execute(&self, _args: Arguments) -> Result<Option<Value>, BridgeError> {
        self.0.open_clock()?;
        Ok(None)
    }
}

#[async_trait]
impl CommandHandler for SearchGoogle {
    fn name(&self) -> &'static str {
        "searchGoogle"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[QUERY]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        self.0.search_google(required_str(&args, QUERY)?);
        Ok(None)
    }
}

#[async_trait]
impl CommandHandler for SearchPlayStore {
    fn name(&self) -> &'static str {
        "searchPlayStore"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[QUERY]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        self.0.search_play_store(required_str(&args, QUERY)?);
        Ok(None)
    }
}

#[async_trait]
impl CommandHandler for SearchDefaultBrowser {
    fn name(&self) -> &'static str {
        "searchDefaultBrowser"
    }
    fn required_arguments(&self) -> &'static [&'static str] {
        &[QUERY]
    }
    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError> {
        self.0.search_default_browser(required_str(&args, QUERY)?);
        Ok(None)
    }
}
