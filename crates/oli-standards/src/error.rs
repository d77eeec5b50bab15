#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("project directory {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode project directory: {0}")]
    Json(#[from] serde_json::Error),

    #[error("project directory is missing the '{column}' column")]
    MissingColumn { column: String },
}

impl StandardsError {
    pub(crate) fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }
}
