use crate::error::BridgeError;
use crate::result::Arguments;
use async_trait::async_trait;
use serde_json::Value;

pub const PACKAGE_NAME: &str = "packageName";
pub const QUERY: &str = "query";

#[async_trait]
pub trait CommandHandler: Send + Sync {
    fn name(&self) -> &'static str;

    /// Other names the handler answers to.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Checked by the bridge before `execute` runs.
    fn required_arguments(&self) -> &'static [&'static str] {
        &[]
    }

    async fn execute(&self, args: Arguments) -> Result<Option<Value>, BridgeError>;
}
