use thiserror::Error;

/// Failure modes of a manifest update run. All of them are terminal: the
/// run aborts, nothing is written back, and the process exits non-zero.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("invalid version format: {0} (expected something like v0.1.3)")]
    InvalidVersionFormat(String),

    #[error("{0} not found")]
    ManifestNotFound(String),

    #[error("failed to parse {file}")]
    ManifestParse {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to download {url}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
