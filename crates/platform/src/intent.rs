//! Requests handed to the activity launcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque name of an installed application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PackageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A concrete activity inside a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRef {
    pub package: String,
    pub class: String,
}

impl ComponentRef {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsPanel {
    /// Default home-app chooser.
    Home,
    General,
}

/// One-way request to start something on the device.
///
/// Starting an intent only reports whether the start was initiated; the
/// launched activity's outcome is never observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    LaunchPackage { package: PackageId },
    StartComponent { component: ComponentRef },
    View { uri: String, package: Option<String> },
    WebSearch { query: String, package: String },
    Settings { panel: SettingsPanel },
}

impl Intent {
    pub fn view(uri: impl Into<String>) -> Self {
        Intent::View {
            uri: uri.into(),
            package: None,
        }
    }

    pub fn view_in(uri: impl Into<String>, package: impl Into<String>) -> Self {
        Intent::View {
            uri: uri.into(),
            package: Some(package.into()),
        }
    }
}
