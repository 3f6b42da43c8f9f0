use std::path::PathBuf;
use thiserror::Error;

// URLs stored in these variants have their `appid` redacted.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build request for {0}")]
    RequestBuild(String, #[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("API key was rejected for {url}")]
    Unauthorized { url: String },

    #[error("API returned {status} for {url}: {message}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to decode JSON response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to determine cache directory")]
    CacheDirResolution,

    #[error("Failed to create directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),

    #[error("Download from {0} failed")]
    Download(String, #[source] std::io::Error),
}
