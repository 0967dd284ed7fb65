//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SmartLaunchError`] via `#[from]` — no stringly-typed variants.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartLaunchError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A domain invariant was violated.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("stop id must not be empty")]
    EmptyStopId,

    #[error("radius must be a positive number of meters")]
    NonPositiveRadius,

    #[error("center coordinates must be finite")]
    NonFiniteCenter,

    #[error("name must not be empty")]
    EmptyName,
}

/// A referenced record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"SmartLaunchRule"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Persistence failed underneath a store port.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: SmartLaunchError = ValidationError::EmptyStopId.into();
        assert!(matches!(
            err,
            SmartLaunchError::Validation(ValidationError::EmptyStopId)
        ));
    }

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "SmartLaunchRule",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "SmartLaunchRule with id abc not found");
    }

    #[test]
    fn should_wrap_io_error_as_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SmartLaunchError = StorageError::from(io).into();
        assert!(matches!(err, SmartLaunchError::Storage(StorageError::Io(_))));
    }
}
