use crate::{
    core::config::Config,
    image::{
        background::{BackgroundMaker, PaletteBackground},
        geometry::Dimensions,
        loader::{Decoder, Fetcher, HttpFetcher, ImageDecoder},
        primitives::{CatmullRomScaler, Drawer, ImageDrawer, Scaler},
        transform::{Fitter, ScalePolicy},
    },
    utils::error::{ImageSourceError, ImageSourceResult},
};
use image::{GenericImageView, RgbaImage};
use log::{debug, info};

/// Fetches, decodes and fits a configured source image.
///
/// Every collaborator is swappable so tests can run without network access.
pub struct Generator {
    fetcher: Box<dyn Fetcher>,
    decoder: Box<dyn Decoder>,
    scaler: Box<dyn Scaler>,
    drawer: Box<dyn Drawer>,
    background: Box<dyn BackgroundMaker>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            fetcher: Box::new(HttpFetcher::new()),
            decoder: Box::new(ImageDecoder),
            scaler: Box::new(CatmullRomScaler),
            drawer: Box::new(ImageDrawer),
            background: Box::new(PaletteBackground),
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn with_decoder(mut self, decoder: impl Decoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    pub fn with_scaler(mut self, scaler: impl Scaler + 'static) -> Self {
        self.scaler = Box::new(scaler);
        self
    }

    pub fn with_drawer(mut self, drawer: impl Drawer + 'static) -> Self {
        self.drawer = Box::new(drawer);
        self
    }

    pub fn with_background(mut self, background: impl BackgroundMaker + 'static) -> Self {
        self.background = Box::new(background);
        self
    }

    pub fn generate(&self, config: &Config, size: Dimensions) -> ImageSourceResult<RgbaImage> {
        let policy: ScalePolicy = config.policy()?;
        let url = config.source.as_str();

        info!("Fetching {}", url);
        let bytes = self
            .fetcher
            .fetch(url)
            .map_err(|cause| ImageSourceError::fetch(url, cause))?;

        let source = self
            .decoder
            .decode(&bytes)
            .map_err(|cause| ImageSourceError::decode(url, cause))?;
        let (width, height) = source.dimensions();
        debug!("Decoded {} as {}x{}", url, width, height);

        let fitter = Fitter::new(
            self.scaler.as_ref(),
            self.drawer.as_ref(),
            self.background.as_ref(),
        );
        let image = fitter.fit(&source, size, policy, config.background_color())?;
        info!("Generated {} image ({})", size, policy);
        Ok(image)
    }
}
