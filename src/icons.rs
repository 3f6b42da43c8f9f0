//! Downloading the weather icons referenced by [`Weather::icon`](crate::Weather).

use crate::api::error::ApiError;
use crate::api::loader::ApiLoader;
use crate::error::OwmError;
use crate::settings::Settings;
use crate::utils::{ensure_dir_exists, get_cache_dir};
use crate::validation::error::ValidationError;
use std::path::{Component, Path, PathBuf};

/// An icon name must be exactly one normal path component, so the file
/// always lands directly inside the destination directory.
fn check_icon_file(icon_file: &str) -> Result<(), ValidationError> {
    let mut components = Path::new(icon_file).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ValidationError::InvalidIconFile(icon_file.to_string())),
    }
}

/// Downloads `icon_file` (e.g. `"10d.png"`) into the `destination` directory
/// and returns the number of bytes written.
///
/// The directory is created when missing. Nothing is written when the server
/// answers with an error status. An `icon_file` that is not a plain file name
/// is rejected with [`ValidationError::InvalidIconFile`] before any request.
///
/// ```no_run
/// # use openweathermap::{retrieve_icon, icon_cache_dir, OwmError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), OwmError> {
/// let dir = icon_cache_dir().await?;
/// let bytes = retrieve_icon(&dir, "10d.png").await?;
/// println!("saved {bytes} bytes to {}", dir.join("10d.png").display());
/// # Ok(())
/// # }
/// ```
pub async fn retrieve_icon(
    destination: impl AsRef<Path>,
    icon_file: &str,
) -> Result<u64, OwmError> {
    retrieve_icon_with(&Settings::default(), destination, icon_file).await
}

/// Like [`retrieve_icon`], using the HTTP client and site base URL of `settings`.
pub async fn retrieve_icon_with(
    settings: &Settings,
    destination: impl AsRef<Path>,
    icon_file: &str,
) -> Result<u64, OwmError> {
    check_icon_file(icon_file)?;
    let destination = destination.as_ref();
    ensure_dir_exists(destination).await?;

    let url = settings.site_url(&format!("/img/w/{icon_file}"));
    let request = settings
        .http_client
        .get(&url)
        .build()
        .map_err(|e| ApiError::RequestBuild(url, e))?;

    let loader = ApiLoader::new(settings.http_client.clone());
    Ok(loader
        .download_to(request, &destination.join(icon_file))
        .await?)
}

/// The default icon directory under the user cache dir, created if needed.
pub async fn icon_cache_dir() -> Result<PathBuf, OwmError> {
    let dir = get_cache_dir()?;
    ensure_dir_exists(&dir).await?;
    Ok(dir)
}
