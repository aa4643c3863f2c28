use super::DesktopOptions;
use crate::error::{PlatformError, PlatformResult};
use crate::intent::{Intent, SettingsPanel};
use crate::traits::ActivityLauncher;
use std::process::{Command, Stdio};
use tracing::debug;

/// Starts intents by spawning `gtk-launch`, `xdg-open` or configured commands.
pub struct DesktopLauncher {
    options: DesktopOptions,
}

impl DesktopLauncher {
    pub fn new(options: DesktopOptions) -> Self {
        Self { options }
    }

    /// Command line an intent maps to.
    pub fn command_for(&self, intent: &Intent) -> PlatformResult<Vec<String>> {
        let argv = match intent {
            Intent::LaunchPackage { package } => {
                vec!["gtk-launch".to_string(), package.to_string()]
            }
            Intent::StartComponent { component } => {
                vec!["gtk-launch".to_string(), component.package.clone()]
            }
            Intent::View { uri, .. } => vec!["xdg-open".to_string(), uri.clone()],
            Intent::WebSearch { query, .. } => {
                let target = self
                    .options
                    .web_search_template
                    .replace("{query}", &urlencoding::encode(query));
                vec!["xdg-open".to_string(), target]
            }
            Intent::Settings { panel } => {
                let configured = match panel {
                    SettingsPanel::Home => &self.options.home_settings_command,
                    SettingsPanel::General => &self.options.settings_command,
                };
                configured
                    .clone()
                    .filter(|argv| !argv.is_empty())
                    .ok_or_else(|| {
                        PlatformError::Unsupported(format!("no command for {panel:?} settings"))
                    })?
            }
        };
        Ok(argv)
    }
}

impl ActivityLauncher for DesktopLauncher {
    fn start(&self, intent: &Intent) -> PlatformResult<()> {
        let argv = self.command_for(intent)?;
        spawn_detached(&argv)
    }
}

fn validate_arg(arg: &str) -> PlatformResult<()> {
    if arg.contains('\0') || arg.contains('\n') {
        return Err(PlatformError::LaunchFailed(
            "argument contains invalid control characters".to_string(),
        ));
    }
    Ok(())
}

/// Spawn without waiting for the program. A reaper thread collects the exit
/// status so the child never lingers as a zombie.
pub(crate) fn spawn_detached(argv: &[String]) -> PlatformResult<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| PlatformError::LaunchFailed("empty command".to_string()))?;
    for arg in argv {
        validate_arg(arg)?;
    }

    debug!("Spawning {} {:?}", program, args);
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PlatformError::LaunchFailed(format!("{program}: {e}")))?;

    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}
