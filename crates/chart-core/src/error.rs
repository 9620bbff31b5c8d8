// File: crates/chart-core/src/error.rs
// Summary: Error type shared by dataset loading and chart output.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[cfg(feature = "fetch")]
    #[error("failed to fetch dataset from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot fetch {0}: built without the `fetch` feature")]
    FetchDisabled(String),

    #[error("cannot decode dataset: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("raster backend: {0}")]
    Raster(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
