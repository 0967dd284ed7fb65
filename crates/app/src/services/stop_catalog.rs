//! Stop catalog — cached view of the static stops dataset.

use tokio::sync::OnceCell;

use smartlaunch_domain::error::SmartLaunchError;
use smartlaunch_domain::geo::{self, Point};
use smartlaunch_domain::id::StopId;
use smartlaunch_domain::stop::Stop;

use crate::ports::StopSource;

/// Loads the stops dataset once and answers lookups from memory.
///
/// The dataset is static for the lifetime of the process; the map and
/// stop pages query it repeatedly.
pub struct StopCatalog<S> {
    source: S,
    stops: OnceCell<Vec<Stop>>,
}

impl<S: StopSource> StopCatalog<S> {
    /// Create a catalog over the given source. Nothing is loaded until
    /// the first query.
    pub fn new(source: S) -> Self {
        Self {
            source,
            stops: OnceCell::new(),
        }
    }

    /// All stops, loading the dataset on first use.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the initial load fails.
    pub async fn all(&self) -> Result<&[Stop], SmartLaunchError> {
        let stops = self
            .stops
            .get_or_try_init(|| self.source.load_stops())
            .await?;
        Ok(stops)
    }

    /// Find a stop by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the initial load fails.
    pub async fn get(&self, stop_id: &StopId) -> Result<Option<&Stop>, SmartLaunchError> {
        Ok(self.all().await?.iter().find(|s| &s.stop_id == stop_id))
    }

    /// Stops within `radius_meters` of a point, nearest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the initial load fails.
    pub async fn nearby(
        &self,
        origin: Point,
        radius_meters: f64,
    ) -> Result<Vec<&Stop>, SmartLaunchError> {
        let mut within: Vec<(f64, &Stop)> = self
            .all()
            .await?
            .iter()
            .map(|stop| (geo::haversine_meters(origin, stop.location()), stop))
            .filter(|(distance, _)| *distance <= radius_meters)
            .collect();
        within.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(within.into_iter().map(|(_, stop)| stop).collect())
    }
}
