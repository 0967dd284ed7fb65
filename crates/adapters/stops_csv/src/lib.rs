//! # smartlaunch-adapter-stops-csv
//!
//! Loads the agency's static stops dataset from a CSV file with a header
//! row (`stop_id,stop_name,stop_lat,stop_lon`, GTFS-style names accepted
//! alongside the short forms the rider app's dataset used).
//!
//! Rows that cannot be parsed, or that are missing an id or coordinates,
//! are skipped with a warning — one bad row never takes down the whole
//! dataset.
//!
//! ## Dependency rule
//! Depends on `smartlaunch-app` (port traits) and `smartlaunch-domain` only.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use smartlaunch_app::ports::StopSource;
use smartlaunch_domain::error::{SmartLaunchError, StorageError};
use smartlaunch_domain::id::StopId;
use smartlaunch_domain::stop::Stop;

/// One CSV row. Field aliases cover both GTFS headers and the short
/// forms found in the rider app's dataset.
#[derive(Debug, Deserialize)]
struct StopRecord {
    #[serde(alias = "id")]
    stop_id: String,
    #[serde(alias = "stop_name")]
    name: String,
    #[serde(alias = "stop_lat")]
    lat: f64,
    #[serde(alias = "stop_lon")]
    lon: f64,
}

/// [`StopSource`] backed by a stops CSV file.
pub struct CsvStopSource {
    path: PathBuf,
}

impl CsvStopSource {
    /// Create a source for the given CSV file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StopSource for CsvStopSource {
    async fn load_stops(&self) -> Result<Vec<Stop>, SmartLaunchError> {
        let path = self.path.clone();
        // The csv crate is synchronous; parse off the async runtime.
        tokio::task::spawn_blocking(move || read_stops(&path))
            .await
            .map_err(|err| StorageError::Io(std::io::Error::other(err)))?
    }
}

fn read_stops(path: &Path) -> Result<Vec<Stop>, SmartLaunchError> {
    let file = std::fs::File::open(path).map_err(StorageError::Io)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut stops = Vec::new();
    for (index, result) in reader.deserialize::<StopRecord>().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(row = index + 2, error = %err, "skipping unparsable stop row");
                continue;
            }
        };
        if record.stop_id.is_empty() || !record.lat.is_finite() || !record.lon.is_finite() {
            tracing::warn!(row = index + 2, "skipping stop row with missing id or coordinates");
            continue;
        }
        stops.push(Stop {
            stop_id: StopId::new(record.stop_id),
            name: record.name,
            lat: record.lat,
            lon: record.lon,
        });
    }

    tracing::debug!(count = stops.len(), path = %path.display(), "loaded stops dataset");
    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn should_load_stops_with_short_headers() {
        let file = write_csv(
            "stop_id,name,lat,lon\n\
             10070,W Johnson at East Campus,43.0731,-89.4012\n\
             10071,State at Lake,43.0748,-89.3940\n",
        );

        let source = CsvStopSource::new(file.path());
        let stops = source.load_stops().await.unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].stop_id.as_str(), "10070");
        assert_eq!(stops[0].name, "W Johnson at East Campus");
    }

    #[tokio::test]
    async fn should_load_stops_with_gtfs_headers() {
        let file = write_csv(
            "stop_id,stop_name,stop_lat,stop_lon\n\
             10070,W Johnson at East Campus,43.0731,-89.4012\n",
        );

        let source = CsvStopSource::new(file.path());
        let stops = source.load_stops().await.unwrap();
        assert_eq!(stops.len(), 1);
        assert!((stops[0].lat - 43.0731).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_skip_rows_with_bad_coordinates() {
        let file = write_csv(
            "stop_id,name,lat,lon\n\
             10070,Good stop,43.0731,-89.4012\n\
             10071,Bad stop,not-a-number,-89.3940\n\
             ,No id,43.0748,-89.3940\n",
        );

        let source = CsvStopSource::new(file.path());
        let stops = source.load_stops().await.unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].stop_id.as_str(), "10070");
    }

    #[tokio::test]
    async fn should_fail_when_file_missing() {
        let source = CsvStopSource::new("/definitely/not/here/stops.csv");
        let result = source.load_stops().await;
        assert!(matches!(result, Err(SmartLaunchError::Storage(_))));
    }
}
