use crate::{
    image::{
        background::BackgroundMaker,
        geometry::{self, Dimensions, DrawOp, Offset},
        primitives::{Drawer, Scaler},
    },
    utils::error::{ImageSourceError, ImageSourceResult},
};
use image::{DynamicImage, GenericImageView, RgbaImage};
use log::debug;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalePolicy {
    /// Stretch to the exact target size, ignoring aspect ratio.
    Resize,
    /// Fit inside the target, padding the short axis with a background color.
    Contain,
    /// Fill the target, cropping the overflowing axis.
    Cover,
}

impl ScalePolicy {
    pub const ALL: [ScalePolicy; 3] = [Self::Resize, Self::Contain, Self::Cover];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalePolicy::Resize => "resize",
            ScalePolicy::Contain => "contain",
            ScalePolicy::Cover => "cover",
        }
    }
}

impl fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalePolicy {
    type Err = ImageSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| ImageSourceError::UnknownScalePolicy(s.to_string()))
    }
}

/// Produces a fixed-size image from a decoded source under a [`ScalePolicy`].
pub struct Fitter<'a> {
    scaler: &'a dyn Scaler,
    drawer: &'a dyn Drawer,
    background: &'a dyn BackgroundMaker,
}

impl<'a> Fitter<'a> {
    pub fn new(
        scaler: &'a dyn Scaler,
        drawer: &'a dyn Drawer,
        background: &'a dyn BackgroundMaker,
    ) -> Self {
        Self {
            scaler,
            drawer,
            background,
        }
    }

    /// `color` is only consulted by [`ScalePolicy::Contain`].
    pub fn fit(
        &self,
        source: &DynamicImage,
        target: Dimensions,
        policy: ScalePolicy,
        color: &str,
    ) -> ImageSourceResult<RgbaImage> {
        let (width, height) = source.dimensions();
        let plan = geometry::resolve(Dimensions::new(width, height), target, policy);
        debug!(
            "Fitting {}x{} into {} ({}): scaled {}, offset ({}, {})",
            width, height, target, policy, plan.scaled, plan.offset.x, plan.offset.y
        );

        match policy {
            ScalePolicy::Contain => {
                let background = self.background.make(target, color)?;
                let scaled = self.scaler.scale(source, plan.scaled);
                let mut canvas = RgbaImage::new(target.width, target.height);
                self.drawer
                    .draw(&mut canvas, &background, Offset::ZERO, DrawOp::Src);
                self.drawer.draw(&mut canvas, &scaled, plan.offset, plan.op);
                Ok(canvas)
            }
            ScalePolicy::Cover => {
                let scaled = self.scaler.scale(source, plan.scaled);
                let mut canvas = RgbaImage::new(target.width, target.height);
                self.drawer.draw(&mut canvas, &scaled, plan.offset, plan.op);
                Ok(canvas)
            }
            ScalePolicy::Resize => {
                let mut canvas = RgbaImage::new(target.width, target.height);
                let scaled = self.scaler.scale(source, target);
                self.drawer.draw(&mut canvas, &scaled, Offset::ZERO, plan.op);
                Ok(canvas)
            }
        }
    }
}
