use reqwest::StatusCode;
use thiserror::Error;

/// Why a hot listing could not be turned into titles.
///
/// Every variant renders the same way on the command line; the distinction
/// exists for logs and tests.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP client could not be built: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream rejected the request with status {status}")]
    UpstreamRejection { status: StatusCode },

    #[error("listing response was malformed: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
