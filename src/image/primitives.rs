use crate::image::geometry::{Dimensions, DrawOp, Offset};
use image::{imageops, imageops::FilterType, DynamicImage, RgbaImage};

pub trait Scaler {
    /// Resamples `source` to exactly `size`.
    fn scale(&self, source: &DynamicImage, size: Dimensions) -> RgbaImage;
}

pub trait Drawer {
    /// Draws `src` onto `dst` so that `src` pixel `offset` lands on `dst`
    /// pixel `(0, 0)`, clipped to `dst`.
    fn draw(&self, dst: &mut RgbaImage, src: &RgbaImage, offset: Offset, op: DrawOp);
}

/// Catmull-Rom (bicubic) resampling.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatmullRomScaler;

impl Scaler for CatmullRomScaler {
    fn scale(&self, source: &DynamicImage, size: Dimensions) -> RgbaImage {
        if size.is_empty() {
            return RgbaImage::new(size.width, size.height);
        }
        imageops::resize(source, size.width, size.height, FilterType::CatmullRom)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDrawer;

impl Drawer for ImageDrawer {
    fn draw(&self, dst: &mut RgbaImage, src: &RgbaImage, offset: Offset, op: DrawOp) {
        match op {
            DrawOp::Src => imageops::replace(dst, src, -offset.x, -offset.y),
            DrawOp::Over => imageops::overlay(dst, src, -offset.x, -offset.y),
        }
    }
}
