use crate::actions::ActionDispatcher;
use crate::app_query::AppQueryService;
use crate::commands::CommandHandler;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::icons::IconCache;
use crate::registry::HandlerRegistry;
use crate::result::{Arguments, Command, CommandResult};
use mini_launcher_platform::PlatformServices;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Single entry point for UI commands.
pub struct CommandBridge {
    registry: Arc<HandlerRegistry>,
}

impl CommandBridge {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    /// Wire the full command set against a set of OS collaborators.
    pub fn from_platform(services: PlatformServices, config: &BridgeConfig) -> Self {
        let icons = Arc::new(IconCache::new(
            config.cache_dir.clone(),
            Arc::clone(&services.registry),
            &config.icons,
        ));
        let apps = Arc::new(AppQueryService::new(
            Arc::clone(&services.registry),
            Arc::clone(&services.launcher),
            icons,
            &config.search,
        ));
        let actions = Arc::new(ActionDispatcher::new(&services, config.search.clone()));

        Self::new(Arc::new(HandlerRegistry::launcher(apps, actions)))
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub async fn dispatch(&self, command: Command) -> CommandResult {
        self.handle(&command.name, command.arguments).await
    }

    pub async fn handle(&self, name: &str, arguments: Option<Arguments>) -> CommandResult {
        debug!("Handling command: {}", name);

        // 1. Route
        let Some(handler) = self.registry.get(name) else {
            debug!("No handler for command {}", name);
            return BridgeError::NotImplemented(name.to_string()).into();
        };

        // 2. Validate before anything runs
        let args = arguments.unwrap_or_default();
        if let Err(e) = validate_arguments(handler.required_arguments(), &args) {
            warn!("Rejected {}: {}", name, e);
            return e.into();
        }

        // 3. Execute with panic isolation
        let result = self.execute_isolated(handler, args).await;
        if let Err(e) = &result {
            info!("Command {} failed: {}", name, e);
        }
        result.into()
    }

    async fn execute_isolated(
        &self,
        handler: Arc<dyn CommandHandler>,
        args: Arguments,
    ) -> Result<Option<Value>, BridgeError> {
        let name = handler.name();
        let task = tokio::spawn(async move { handler.execute(args).await });

        match task.await {
            Ok(result) => result,
            Err(join_err) => {
                if join_err.is_panic() {
                    error!("Command {} panicked", name);
                } else {
                    error!("Command {} was cancelled", name);
                }
                Err(BridgeError::Unavailable(format!(
                    "Internal error while handling {name}"
                )))
            }
        }
    }
}

fn validate_arguments(required: &[&str], args: &Arguments) -> Result<(), BridgeError> {
    for field in required {
        match args.get(*field) {
            Some(Value::String(_)) => {}
            _ => return Err(BridgeError::MissingArgument(field.to_string())),
        }
    }
    Ok(())
}
