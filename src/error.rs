use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read source {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed source csv")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize catalog")]
    Json(#[from] serde_json::Error),

    #[error("failed to write catalog to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
