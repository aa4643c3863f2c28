//! Fallback search over known alarm-clock implementations.

use mini_launcher_platform::{ComponentRef, PackageRegistry, PlatformResult};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockImplementation {
    pub label: &'static str,
    pub package: &'static str,
    pub class: &'static str,
}

impl ClockImplementation {
    pub fn component(&self) -> ComponentRef {
        ComponentRef::new(self.package, self.class)
    }
}

/// Probed in order; the first installed one wins.
pub const CLOCK_IMPLEMENTATIONS: &[ClockImplementation] = &[
    ClockImplementation {
        label: "HTC Alarm Clock",
        package: "com.htc.android.worldclock",
        class: "com.htc.android.worldclock.WorldClockTabControl",
    },
    ClockImplementation {
        label: "Standard Alarm Clock",
        package: "com.android.deskclock",
        class: "com.android.deskclock.AlarmClock",
    },
    ClockImplementation {
        label: "Froyo Nexus Alarm Clock",
        package: "com.google.android.deskclock",
        class: "com.android.deskclock.DeskClock",
    },
    ClockImplementation {
        label: "Moto Blur Alarm Clock",
        package: "com.motorola.blur.alarmclock",
        class: "com.motorola.blur.alarmclock.AlarmClock",
    },
    ClockImplementation {
        label: "Samsung Galaxy Clock",
        package: "com.sec.android.app.clockpackage",
        class: "com.sec.android.app.clockpackage.ClockPackage",
    },
    ClockImplementation {
        label: "Sony Xperia Z",
        package: "com.sonyericsson.organizer",
        class: "com.sonyericsson.organizer.Organizer_WorldClock",
    },
    ClockImplementation {
        label: "ASUS Tablets",
        package: "com.asus.deskclock",
        class: "com.asus.deskclock.DeskClock",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockSearch {
    Trying(usize),
    Found(ComponentRef),
    Exhausted,
}

impl ClockSearch {
    pub fn start() -> Self {
        ClockSearch::Trying(0)
    }

    pub fn is_done(&self) -> bool {
        !matches!(self, ClockSearch::Trying(_))
    }

    /// Probe the current entry. "Not found" advances to the next entry;
    /// any other registry fault is returned to the caller.
    pub fn step(
        self,
        table: &[ClockImplementation],
        registry: &dyn PackageRegistry,
    ) -> PlatformResult<Self> {
        let index = match self {
            ClockSearch::Trying(index) => index,
            done => return Ok(done),
        };
        let Some(entry) = table.get(index) else {
            return Ok(ClockSearch::Exhausted);
        };

        let component = entry.component();
        match registry.activity_info(&component) {
            Ok(()) => {
                debug!("Clock resolved to {} ({})", entry.label, component);
                Ok(ClockSearch::Found(component))
            }
            Err(e) if e.is_not_found() => {
                debug!("{} not installed", entry.label);
                Ok(ClockSearch::Trying(index + 1))
            }
            Err(e) => Err(e),
        }
    }
}

/// Run the search to completion.
pub fn find_clock(
    table: &[ClockImplementation],
    registry: &dyn PackageRegistry,
) -> PlatformResult<Option<ComponentRef>> {
    let mut state = ClockSearch::start();
    while !state.is_done() {
        state = state.step(table, registry)?;
    }
    Ok(match state {
        ClockSearch::Found(component) => Some(component),
        _ => None,
    })
}
