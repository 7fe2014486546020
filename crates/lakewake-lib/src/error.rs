use thiserror::Error;

/// Convenient result alias for the lakewake library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when vessel input values fail validation.
    #[error("invalid vessel data: {message}")]
    VesselDataValidation { message: String },

    /// Raised when the wake pipeline produces a non-finite quantity.
    #[error("wake computation failed: {message}")]
    WakeComputation { message: String },

    /// Raised when the station catalog is structurally unusable.
    #[error("invalid station catalog: {message}")]
    StationCatalog { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for CSV serialization errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
