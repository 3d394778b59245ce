use std::path::PathBuf;

use thiserror::Error;

use crate::passes::dotfile::DotfileError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("reading {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("reading {what}: {source}")]
    Dotfile {
        what: &'static str,
        source: DotfileError,
    },
    #[error("some location or preference information is missing: {0}")]
    MissingValue(String),
    #[error("creating request: {0}")]
    InvalidUrl(String),
    #[error("sending request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("reading response: {0}")]
    Response(#[source] reqwest::Error),
    #[error("decoding visual passes: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A fetch failure for one satellite of a batch
#[derive(Debug, Error)]
#[error("obtaining visual passes for satellite {satellite_id}: {source}")]
pub struct ReportError {
    pub satellite_id: u32,
    pub source: FetchError,
}
