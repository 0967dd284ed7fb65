//! Geographic primitives — points, great-circle distance, geofence circles.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used by the haversine formula.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude, used by the circle approximation.
const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Earth circumference in meters at the equator (web mercator).
const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;

/// Number of segments in a rendered geofence circle.
const CIRCLE_SEGMENTS: usize = 64;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Construct a point from decimal-degree coordinates.
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Great-circle distance between two points in meters (haversine).
///
/// Always finite and non-negative for finite inputs. Accuracy is well
/// within what city-scale geofencing needs.
#[must_use]
pub fn haversine_meters(a: Point, b: Point) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lon = (d_lon / 2.0).sin();
    let h = sin_lat * sin_lat
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * sin_lon * sin_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Closed polygon approximating a geofence circle, for map display.
///
/// Uses an equirectangular offset with [`CIRCLE_SEGMENTS`] segments; the
/// first and last vertices coincide so the ring is closed. Display aid
/// only — nothing correctness-critical consumes the polygon.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circle_polygon(center: Point, radius_meters: f64) -> Vec<Point> {
    let d_lat = radius_meters / METERS_PER_DEGREE_LAT;
    let d_lon = radius_meters / (METERS_PER_DEGREE_LAT * center.lat.to_radians().cos());

    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = (i as f64 / CIRCLE_SEGMENTS as f64) * std::f64::consts::TAU;
            Point {
                lat: center.lat + angle.sin() * d_lat,
                lon: center.lon + angle.cos() * d_lon,
            }
        })
        .collect()
}

/// Approximate meters per screen pixel at a web-mercator zoom level.
///
/// Used when deriving a rule radius from a fixed-size on-screen circle.
#[must_use]
pub fn meters_per_pixel(zoom: f64, lat: f64) -> f64 {
    // 256-pixel tiles: 2^(zoom + 8) pixels around the globe.
    lat.to_radians().cos() * EARTH_CIRCUMFERENCE_M / 2f64.powf(zoom + 8.0)
}
