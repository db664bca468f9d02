use crate::utils::error::BoxError;
use image::{DynamicImage, ImageError};
use log::debug;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_BODY_SIZE: u64 = 64 * 1024 * 1024;

pub trait Fetcher {
    /// Returns the full body found at `url`.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, BoxError>;
}

pub trait Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ImageError>;
}

/// Blocking HTTP(S) GET. Non-2xx responses are failures.
pub struct HttpFetcher {
    agent: ureq::Agent,
    max_size: u64,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.into(),
            max_size: MAX_BODY_SIZE,
        }
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, BoxError> {
        let mut response = self.agent.get(url).call()?;
        debug!("GET {} -> {}", url, response.status());

        let bytes = response
            .body_mut()
            .with_config()
            .limit(self.max_size)
            .read_to_vec()?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}

/// Decodes any format the `image` crate recognises from its magic bytes
/// (JPEG, PNG, GIF first frame).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDecoder;

impl Decoder for ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ImageError> {
        image::load_from_memory(bytes)
    }
}
