use crate::api::error::ApiError;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use reqwest::{Client, Request, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio_util::io::StreamReader;

/// Error body the API sends alongside non-success statuses.
/// `cod` is a number on some endpoints and a string on others.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    cod: serde_json::Value,
    message: String,
}

/// Sends prepared requests and turns responses into typed values.
#[derive(Debug, Clone)]
pub struct ApiLoader {
    client: Client,
}

impl ApiLoader {
    pub fn new(client: Client) -> ApiLoader {
        ApiLoader { client }
    }

    /// Executes `request` and decodes the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let url = redact_url(request.url());
        let response = self.execute(request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::BodyRead(url.clone(), e))?;

        let decoded = serde_json::from_str::<T>(&body).map_err(|source| {
            warn!("Could not decode response from {}: {}", url, source);
            ApiError::Decode {
                url: url.clone(),
                source,
            }
        })?;
        info!("Decoded {} bytes from {}", body.len(), url);
        Ok(decoded)
    }

    /// Executes `request` and returns the raw body text.
    pub async fn get_text(&self, request: Request) -> Result<String, ApiError> {
        let url = redact_url(request.url());
        let response = self.execute(request).await?;
        response.text().await.map_err(|e| ApiError::BodyRead(url, e))
    }

    /// Streams the response body into `path`, returning the number of bytes written.
    ///
    /// The body is written to a temporary file next to `path` first, so a failed
    /// download never leaves a partial file behind.
    pub async fn download_to(&self, request: Request, path: &Path) -> Result<u64, ApiError> {
        let url = redact_url(request.url());
        let response = self.execute(request).await?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let temp_file =
            NamedTempFile::new_in(dir).map_err(|e| ApiError::FileWrite(path.to_path_buf(), e))?;
        let std_file = temp_file
            .reopen()
            .map_err(|e| ApiError::FileWrite(path.to_path_buf(), e))?;
        let mut file = tokio::fs::File::from_std(std_file);

        let stream = response.bytes_stream().map_err(io::Error::other);
        let reader = StreamReader::new(stream);
        tokio::pin!(reader);
        let written = tokio::io::copy(&mut reader, &mut file)
            .await
            .map_err(|e| ApiError::Download(url.clone(), e))?;
        file.flush()
            .await
            .map_err(|e| ApiError::FileWrite(path.to_path_buf(), e))?;
        drop(file);

        temp_file
            .persist(path)
            .map_err(|e| ApiError::FileWrite(path.to_path_buf(), e.error))?;
        info!("Downloaded {} bytes from {} to {:?}", written, url, path);
        Ok(written)
    }

    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let url = redact_url(request.url());
        debug!("{} {}", request.method(), url);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!("HTTP error {} for {}: {}", status, url, body);
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized { url });
        }
        Err(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(error_body) => ApiError::Api {
                url,
                status,
                message: error_body.message,
            },
            Err(_) => ApiError::HttpStatus { url, status, body },
        })
    }
}

/// Renders `url` with the `appid` query value masked.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "appid") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { "****".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
