use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{CASCADE_SEARCH_DIRS, OPENCV_DATA_DIR_ENV};

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("failed to create cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("download failed for {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("failed to write cascade to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Resolve a cascade file by name, checking local locations before downloading.
///
/// Resolution order:
/// 1. User cache directory (platform-specific)
/// 2. Each of `search_dirs`, in order
/// 3. Download from URL to cache
pub fn resolve(
    name: &str,
    url: &str,
    search_dirs: &[PathBuf],
    progress: Option<ProgressFn>,
) -> Result<PathBuf, CascadeResolveError> {
    resolve_in(&cascade_cache_dir()?, name, url, search_dirs, progress)
}

fn resolve_in(
    cache_dir: &Path,
    name: &str,
    url: &str,
    search_dirs: &[PathBuf],
    progress: Option<ProgressFn>,
) -> Result<PathBuf, CascadeResolveError> {
    let cached_path = cache_dir.join(name);
    if cached_path.exists() {
        log::debug!("Using cached cascade {}", cached_path.display());
        return Ok(cached_path);
    }

    if let Some(found) = find_local(name, search_dirs) {
        log::debug!("Using installed cascade {}", found.display());
        return Ok(found);
    }

    fs::create_dir_all(cache_dir).map_err(CascadeResolveError::CacheDir)?;
    log::info!("Downloading {name} from {url}");
    download(url, &cached_path, progress)?;
    Ok(cached_path)
}

/// Returns the first `search_dirs` entry containing `name`.
pub fn find_local(name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Default search directories: `$OPENCV_DATA_DIR/haarcascades` first (when
/// set), then the usual system install locations.
pub fn default_search_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::with_capacity(CASCADE_SEARCH_DIRS.len() + 1);
    if let Some(data_dir) = env::var_os(OPENCV_DATA_DIR_ENV) {
        dirs.push(PathBuf::from(data_dir).join("haarcascades"));
    }
    dirs.extend(CASCADE_SEARCH_DIRS.iter().map(PathBuf::from));
    dirs
}

/// Platform-specific cascade cache directory.
///
/// - macOS: `~/Library/Application Support/SmartLight/cascades/`
/// - Linux: `$XDG_CACHE_HOME/SmartLight/cascades/` or `~/.cache/SmartLight/cascades/`
/// - Windows: `%LOCALAPPDATA%/SmartLight/cascades/`
pub fn cascade_cache_dir() -> Result<PathBuf, CascadeResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join("SmartLight").join("cascades"))
            .ok_or(CascadeResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join("SmartLight").join("cascades"))
            .ok_or(CascadeResolveError::NoCacheDir)
    }
}

fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), CascadeResolveError> {
    let response = reqwest::blocking::get(url).map_err(|e| CascadeResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CascadeResolveError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let total = response.content_length().unwrap_or(0);
    let bytes = response.bytes().map_err(|e| CascadeResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    write_to_cache(&bytes, dest, total, progress.as_ref())
}

/// Writes `bytes` to `dest` through a `.part` file renamed into place.
///
/// On any failure the `.part` file is removed, so a failed write leaves
/// nothing behind.
fn write_to_cache(
    bytes: &[u8],
    dest: &Path,
    total: u64,
    progress: Option<&ProgressFn>,
) -> Result<(), CascadeResolveError> {
    let temp_path = dest.with_extension("part");
    let result = write_part(bytes, &temp_path, total, progress)
        .and_then(|()| fs::rename(&temp_path, dest).map_err(write_error(dest)));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_part(
    bytes: &[u8],
    temp_path: &Path,
    total: u64,
    progress: Option<&ProgressFn>,
) -> Result<(), CascadeResolveError> {
    let mut file = fs::File::create(temp_path).map_err(write_error(temp_path))?;

    let mut downloaded: u64 = 0;
    let chunk_size = 64 * 1024;
    for chunk in bytes.chunks(chunk_size) {
        file.write_all(chunk).map_err(write_error(temp_path))?;
        downloaded += chunk.len() as u64;
        if let Some(cb) = progress {
            cb(downloaded, total);
        }
    }

    file.flush().map_err(write_error(temp_path))
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> CascadeResolveError {
    let path = path.to_path_buf();
    move |source| CascadeResolveError::Write { path, source }
}
