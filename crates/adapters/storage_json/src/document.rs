//! Whole-document JSON list IO.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use smartlaunch_domain::error::{SmartLaunchError, StorageError};

/// Read a JSON list document. Missing file → empty list; unparsable
/// content → empty list with a warning, matching the rider app's
/// catch-and-reset behavior.
pub(crate) async fn load_list<T: DeserializeOwned>(
    path: &Path,
) -> Result<Vec<T>, SmartLaunchError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StorageError::Io(err).into()),
    };

    match serde_json::from_slice(&bytes) {
        Ok(list) => Ok(list),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "malformed storage document, treating as empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Replace a JSON list document atomically (temp file + rename).
pub(crate) async fn save_list<T: Serialize + Sync>(
    path: &Path,
    list: &[T],
) -> Result<(), SmartLaunchError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(StorageError::Io)?;
    }

    let json = serde_json::to_vec_pretty(list).map_err(StorageError::Serialization)?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &json)
        .await
        .map_err(StorageError::Io)?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(StorageError::Io)?;
    Ok(())
}
