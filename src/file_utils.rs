use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::content::ImageRef;
use crate::error::{AppError, Result};
use std::path::{Component, Path, PathBuf};

/// Path helpers for log output.
pub trait PathExt {
    /// Shortens a path to its file name for log lines.
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display().to_string())
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Maps a site-relative image reference onto a file under `asset_root`.
///
/// Remote URIs and references that would climb out of the asset root are rejected.
pub fn resolve_asset(asset_root: &Path, image: &ImageRef) -> Result<PathBuf> {
    if image.is_remote() {
        return Err(AppError::ImageLoad(format!(
            "remote images are not fetched: {}",
            image.as_str()
        )));
    }

    let relative = Path::new(image.as_str().trim_start_matches('/'));
    let escapes = relative
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if escapes || relative.as_os_str().is_empty() {
        return Err(AppError::AssetNotFound(relative.to_path_buf()));
    }

    let path = asset_root.join(relative);
    if !is_supported_image(&path) {
        return Err(AppError::ImageLoad(format!(
            "unsupported image format: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(AppError::AssetNotFound(path));
    }
    Ok(path)
}
