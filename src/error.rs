use thiserror::Error;

/// Anything that can go wrong talking to one of the two apis
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} was not successful, status: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not parse response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no gameweek is marked as current")]
    NoCurrentEvent,
}
