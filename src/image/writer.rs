use crate::utils::error::{ImageSourceError, ImageSourceResult};
use image::{ImageError, ImageFormat, RgbaImage};
use log::info;
use std::{
    fs,
    io::{Cursor, Write},
    path::Path,
};

pub trait Encoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, ImageError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PngEncoder;

impl Encoder for PngEncoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Encodes fully in memory before touching the destination, so a failed
/// encode never leaves a partial file behind.
pub struct ImageWriter {
    encoder: Box<dyn Encoder>,
}

impl Default for ImageWriter {
    fn default() -> Self {
        Self::new(PngEncoder)
    }
}

impl ImageWriter {
    pub fn new(encoder: impl Encoder + 'static) -> Self {
        Self {
            encoder: Box::new(encoder),
        }
    }

    pub fn save(&self, image: &RgbaImage, path: &Path) -> ImageSourceResult<()> {
        let bytes = self.encode(image)?;
        fs::write(path, &bytes).map_err(|cause| ImageSourceError::WriteFailed {
            path: path.to_path_buf(),
            cause,
        })?;
        info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    pub fn write_to(&self, image: &RgbaImage, out: &mut dyn Write) -> ImageSourceResult<()> {
        let bytes = self.encode(image)?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }

    fn encode(&self, image: &RgbaImage) -> ImageSourceResult<Vec<u8>> {
        self.encoder
            .encode(image)
            .map_err(ImageSourceError::EncodeFailed)
    }
}
