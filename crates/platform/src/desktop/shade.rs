use super::launcher::spawn_detached;
use crate::error::{PlatformError, PlatformResult};
use crate::traits::NotificationShade;

/// Opens the notification centre by running a configured command
/// (e.g. `swaync-client -op`).
pub struct CommandShade {
    command: Option<Vec<String>>,
}

impl CommandShade {
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self { command }
    }
}

impl NotificationShade for CommandShade {
    fn expand(&self) -> PlatformResult<()> {
        match &self.command {
            Some(argv) if !argv.is_empty() => spawn_detached(argv),
            _ => Err(PlatformError::Unsupported(
                "no notification command configured".to_string(),
            )),
        }
    }
}
