use anyhow::{Context, Result};
use mini_launcher_app::config::Config;
use mini_launcher_app::host;
use mini_launcher_bridge::CommandBridge;
use mini_launcher_platform::desktop::{CommandShade, DesktopLauncher, DesktopRegistry};
use mini_launcher_platform::PlatformServices;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn config_arg() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = Config::path(config_arg().as_deref());
    let config = Config::load_or_default(&config_path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    // stdout carries responses, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let bridge_config = config.bridge_config();
    std::fs::create_dir_all(&bridge_config.cache_dir).with_context(|| {
        format!(
            "Failed to create icon cache dir {}",
            bridge_config.cache_dir.display()
        )
    })?;

    let desktop = config.desktop_options();
    let registry = Arc::new(DesktopRegistry::new(&desktop));
    let apps = registry.refresh();
    info!("Indexed {} applications", apps);

    let services = PlatformServices::new(
        registry,
        Arc::new(DesktopLauncher::new(desktop.clone())),
        Arc::new(CommandShade::new(desktop.notification_command.clone())),
    );
    let bridge = CommandBridge::from_platform(services, &bridge_config);
    info!(
        "Serving {} commands: {}",
        bridge.registry().count(),
        bridge.registry().list().join(", ")
    );

    let handled = host::serve(
        &bridge,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
    .context("Command channel failed")?;

    info!("Shutting down after {} commands", handled);
    Ok(())
}
