use crate::{
    image::{background, transform::ScalePolicy},
    utils::error::{ImageSourceError, ImageSourceResult},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default)]
    pub color: String,
}

/// Image source settings, read from a YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub scale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundConfig>,
}

impl Config {
    pub fn new(source: impl Into<String>, scale: ScalePolicy) -> Self {
        Self {
            source: source.into(),
            scale: scale.as_str().to_string(),
            background: None,
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(BackgroundConfig {
            color: color.into(),
        });
        self
    }

    /// The blank config printed by the `config` command.
    pub fn skeleton() -> Self {
        Self::new("", ScalePolicy::Resize).with_background("")
    }

    pub fn to_json(&self) -> ImageSourceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads, defaults and validates a config file.
    pub fn parse(path: &Path) -> ImageSourceResult<Self> {
        let data = fs::read_to_string(path).map_err(|cause| ImageSourceError::ConfigReadFailed {
            path: path.to_path_buf(),
            cause,
        })?;
        let mut config = Self::from_str_unvalidated(&data).map_err(|cause| {
            ImageSourceError::ConfigParseFailed {
                path: path.to_path_buf(),
                cause,
            }
        })?;
        config.fill_defaults();
        config.validate()?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn from_str_unvalidated(data: &str) -> Result<Self, serde_yaml::Error> {
        // JSON is a subset of YAML, so one parser covers both file types.
        serde_yaml::from_str(data)
    }

    pub fn fill_defaults(&mut self) {
        let background = self.background.get_or_insert_with(BackgroundConfig::default);
        if background.color.trim().is_empty() {
            background.color = background::DEFAULT_BACKGROUND.to_string();
        }
    }

    pub fn validate(&self) -> ImageSourceResult<()> {
        if self.source.is_empty() {
            return Err(ImageSourceError::MissingSource);
        }
        self.policy().map_err(|_| ImageSourceError::InvalidScaleValue {
            value: self.scale.clone(),
        })?;
        background::resolve_color(self.background_color())?;
        Ok(())
    }

    pub fn policy(&self) -> ImageSourceResult<ScalePolicy> {
        self.scale.parse()
    }

    pub fn background_color(&self) -> &str {
        self.background
            .as_ref()
            .map(|b| b.color.as_str())
            .unwrap_or(background::DEFAULT_BACKGROUND)
    }
}
