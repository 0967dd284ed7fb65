//! Stop — a transit boarding location from the static stops dataset.

use serde::{Deserialize, Serialize};

use crate::geo::Point;
use crate::id::StopId;

/// A row of the agency's stops dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub stop_id: StopId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Stop {
    /// Location of the stop as a geographic point.
    #[must_use]
    pub fn location(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}
