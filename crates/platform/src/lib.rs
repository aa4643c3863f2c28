//! OS collaborator contracts for the launcher command bridge.
//!
//! The bridge never talks to the operating system directly. Everything it
//! needs goes through the traits in [`traits`]:
//! - package registry reads (install metadata, launch entry points, icons)
//! - one-way activity starts
//! - the notification shade
//!
//! [`desktop`] implements the contracts for freedesktop-style Linux sessions.

pub mod desktop;
pub mod error;
pub mod icon;
pub mod intent;
pub mod traits;

pub use error::{PlatformError, PlatformResult};
pub use icon::{AdaptiveIcon, Canvas, IconRepresentation, LayeredDrawable};
pub use intent::{ComponentRef, Intent, PackageId, SettingsPanel};
pub use traits::{ActivityLauncher, NotificationShade, PackageRegistry, PlatformServices};
