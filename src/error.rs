//! Unified error types for the landing page application.

use crate::carousel::CarouselError;
use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Image reference does not point at a readable local asset
    AssetNotFound(PathBuf),
    /// Carousel precondition violated
    Carousel(CarouselError),
    /// Link URL is malformed or does not belong to its platform
    InvalidLink(String),
    /// The system browser could not be launched
    LinkOpen(String),
    /// Tab index outside the tab bar
    UnknownTab { index: usize, count: usize },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::AssetNotFound(path) => write!(f, "Asset not found: {}", path.display()),
            AppError::Carousel(err) => write!(f, "Carousel error: {}", err),
            AppError::InvalidLink(msg) => write!(f, "Invalid link: {}", msg),
            AppError::LinkOpen(msg) => write!(f, "Failed to open link: {}", msg),
            AppError::UnknownTab { index, count } => {
                write!(f, "Tab {} does not exist ({} tabs)", index, count)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<CarouselError> for AppError {
    fn from(err: CarouselError) -> Self {
        AppError::Carousel(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidLink(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = AppError::UnknownTab { index: 9, count: 6 };
        assert_eq!(err.to_string(), "Tab 9 does not exist (6 tabs)");

        let err: AppError = CarouselError::SlideOutOfRange { index: 4, len: 4 }.into();
        assert_eq!(
            err.to_string(),
            "Carousel error: slide 4 is out of range for 4 images"
        );
    }

    #[test]
    fn url_errors_become_invalid_link() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::InvalidLink(_)));
    }
}
