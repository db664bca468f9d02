use image::ImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by collaborator failures (HTTP transport, custom fetchers).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ImageSourceError {
    #[error("failed to fetch image ({url}): {cause}")]
    FetchFailed {
        url: String,
        #[source]
        cause: BoxError,
    },

    #[error("failed to decode image ({url}): {cause}")]
    DecodeFailed {
        url: String,
        #[source]
        cause: ImageError,
    },

    #[error("scale value is invalid: \"{value}\", must be one of resize, contain, cover")]
    InvalidScaleValue { value: String },

    #[error("unknown image scale type: {0}")]
    UnknownScalePolicy(String),

    #[error("unknown color name: {name}")]
    UnknownColorName { name: String },

    #[error("missing image source")]
    MissingSource,

    #[error("failed to read image config file ({}): {cause}", path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("failed to parse image config file ({}): {cause}", path.display())]
    ConfigParseFailed {
        path: PathBuf,
        #[source]
        cause: serde_yaml::Error,
    },

    #[error("failed to encode image: {0}")]
    EncodeFailed(#[source] ImageError),

    #[error("failed to write image ({}): {cause}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ImageSourceError {
    pub fn fetch(url: &str, cause: impl Into<BoxError>) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            cause: cause.into(),
        }
    }

    pub fn decode(url: &str, cause: ImageError) -> Self {
        Self::DecodeFailed {
            url: url.to_string(),
            cause,
        }
    }
}

pub type ImageSourceResult<T> = Result<T, ImageSourceError>;
