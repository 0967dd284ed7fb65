//! # smartlaunch-adapter-virtual
//!
//! In-process stand-ins for the device-facing ports: a [`VirtualLocator`]
//! that reports a configured position (or failure), and a
//! [`TracingNavigator`] that records launch targets instead of driving a
//! real page transition. Used by the daemon when no real positioning
//! hardware is wired in, and handy in tests.
//!
//! ## Dependency rule
//! Depends on `smartlaunch-app` (port traits) and `smartlaunch-domain` only.

use std::sync::Mutex;

use smartlaunch_app::ports::{Fix, FixOptions, LocateError, Locator, NavigationSink};
use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::id::StopId;

/// What the virtual locator reports on each request.
#[derive(Debug, Clone)]
enum Position {
    Fixed(Fix),
    Unavailable,
    Failing(String),
}

/// [`Locator`] that replays a configured position.
///
/// The position can be moved at runtime, which makes it easy to walk a
/// simulated device in and out of a rule's geofence.
pub struct VirtualLocator {
    position: Mutex<Position>,
}

impl VirtualLocator {
    /// Locator that always reports the given coordinates.
    #[must_use]
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Mutex::new(Position::Fixed(Fix {
                latitude,
                longitude,
            })),
        }
    }

    /// Locator that reports no location capability.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            position: Mutex::new(Position::Unavailable),
        }
    }

    /// Locator whose requests fail with the given reason.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            position: Mutex::new(Position::Failing(reason.into())),
        }
    }

    /// Move the simulated device.
    pub fn move_to(&self, latitude: f64, longitude: f64) {
        if let Ok(mut position) = self.position.lock() {
            *position = Position::Fixed(Fix {
                latitude,
                longitude,
            });
        }
    }
}

impl Locator for VirtualLocator {
    async fn locate(&self, _options: FixOptions) -> Result<Fix, LocateError> {
        let position = self
            .position
            .lock()
            .map_err(|_| LocateError::Failed("locator state poisoned".into()))?
            .clone();
        match position {
            Position::Fixed(fix) => Ok(fix),
            Position::Unavailable => Err(LocateError::Unavailable),
            Position::Failing(reason) => Err(LocateError::Failed(reason)),
        }
    }
}

/// [`NavigationSink`] that logs the target stop and remembers it.
#[derive(Default)]
pub struct TracingNavigator {
    last_target: Mutex<Option<StopId>>,
}

impl TracingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent launch target, if any launch has fired.
    #[must_use]
    pub fn last_target(&self) -> Option<StopId> {
        self.last_target.lock().ok().and_then(|guard| guard.clone())
    }
}

impl NavigationSink for TracingNavigator {
    async fn go_to(&self, stop_id: &StopId) -> Result<(), SmartLaunchError> {
        tracing::info!(stop_id = %stop_id, "navigating to stop");
        if let Ok(mut guard) = self.last_target.lock() {
            *guard = Some(stop_id.clone());
        }
        Ok(())
    }
}
