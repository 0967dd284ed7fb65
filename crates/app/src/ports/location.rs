//! Location port — one-shot device position fix.

use std::future::Future;
use std::time::Duration;

use smartlaunch_domain::geo::Point;

/// A single reported device location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
}

impl Fix {
    /// The fix as a geographic point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }
}

/// Options for a one-shot position request.
///
/// The defaults mirror what the rider app asked the browser for: coarse
/// accuracy is fine, a cached fix up to a minute old is acceptable, and
/// the request gives up after ten seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixOptions {
    pub high_accuracy: bool,
    pub maximum_age: Duration,
    pub timeout: Duration,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: false,
            maximum_age: Duration::from_secs(60),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Why a fix could not be obtained.
///
/// Both variants are non-fatal to callers; the launch feature quietly does
/// nothing for this page visit.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// The device has no location capability at all.
    #[error("location capability unavailable")]
    Unavailable,

    /// Permission denied, timeout, or any other provider failure.
    #[error("location fix failed: {0}")]
    Failed(String),
}

/// Provides one-shot device location fixes.
pub trait Locator {
    /// Request a single position fix.
    fn locate(
        &self,
        options: FixOptions,
    ) -> impl Future<Output = Result<Fix, LocateError>> + Send;
}

impl<T: Locator + Send + Sync> Locator for std::sync::Arc<T> {
    fn locate(
        &self,
        options: FixOptions,
    ) -> impl Future<Output = Result<Fix, LocateError>> + Send {
        (**self).locate(options)
    }
}
