use crate::actions::ActionDispatcher;
use crate::app_query::AppQueryService;
use crate::commands::*;
use std::collections::HashMap;
use std::sync::Arc;

pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// The full launcher command set.
    pub fn launcher(apps: Arc<AppQueryService>, actions: Arc<ActionDispatcher>) -> Self {
        let mut registry = Self::new();
        registry
            .register(Arc::new(ExpandNotifications(actions.clone())))
            .register(Arc::new(GetAppInstallTime(apps.clone())))
            .register(Arc::new(ChangeLauncher(actions.clone())))
            .register(Arc::new(GetAppIconPath(apps.clone())))
            .register(Arc::new(ShowClock(actions.clone())))
            .register(Arc::new(CanLaunchApp(apps.clone())))
            .register(Arc::new(SearchGoogle(actions.clone())))
            .register(Arc::new(SearchPlayStore(actions.clone())))
            .register(Arc::new(SearchDefaultBrowser(actions)))
            .register(Arc::new(OpenApp(apps)));
        registry
    }

    /// Register under the handler's name and every alias.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) -> &mut Self {
        for alias in handler.aliases() {
            self.handlers.insert(alias.to_string(), handler.clone());
        }
        self.handlers.insert(handler.name().to_string(), handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Canonical command names, sorted. Aliases are not listed.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .iter()
            .filter(|(key, handler)| key.as_str() == handler.name())
            .map(|(key, _)| key.clone())
            .collect();
        names.sort();
        names
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
