use crate::api::error::ApiError;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "openweathermap_icons";

/// Default directory for downloaded weather icons, under the user cache dir.
pub fn get_cache_dir() -> Result<PathBuf, ApiError> {
    dirs::cache_dir()
        .ok_or(ApiError::CacheDirResolution)
        .map(|p| p.join(CACHE_DIR_NAME))
}

pub async fn ensure_dir_exists(path: &Path) -> Result<(), ApiError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(ApiError::CacheDirCreation(
                    path.to_path_buf(),
                    io::Error::new(io::ErrorKind::AlreadyExists, "path is not a directory"),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| ApiError::CacheDirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(ApiError::CacheDirCreation(path.to_path_buf(), e)),
    }
}
