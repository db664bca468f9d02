use crate::image::transform::ScalePolicy;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Point of the scaled content that lands on the canvas origin.
///
/// Negative components inset the content (padding), positive ones crop it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// How scaled content is written onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Replace destination pixels unconditionally, alpha included.
    Src,
    /// Alpha-composite source over the destination.
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitPlan {
    pub scaled: Dimensions,
    pub offset: Offset,
    pub op: DrawOp,
}

/// Computes the plan for drawing `source` into `target` under `policy`.
///
/// Source dimensions must be non-zero. A zero-sized target yields a zero-sized
/// scaled size along the affected axis.
pub fn resolve(source: Dimensions, target: Dimensions, policy: ScalePolicy) -> FitPlan {
    debug_assert!(!source.is_empty(), "source image has no pixels");

    let x_scale = f64::from(target.width) / f64::from(source.width);
    let y_scale = f64::from(target.height) / f64::from(source.height);

    match policy {
        ScalePolicy::Resize => FitPlan {
            scaled: target,
            offset: Offset::ZERO,
            op: DrawOp::Over,
        },
        ScalePolicy::Contain => {
            let scaled = uniform_scale(source, target, x_scale, y_scale, x_scale.min(y_scale));
            let offset = if x_scale > y_scale {
                Offset::new(half_overflow(scaled.width, target.width), 0)
            } else {
                Offset::new(0, half_overflow(scaled.height, target.height))
            };
            FitPlan {
                scaled,
                offset,
                op: DrawOp::Src,
            }
        }
        ScalePolicy::Cover => {
            let scaled = uniform_scale(source, target, x_scale, y_scale, x_scale.max(y_scale));
            let offset = if x_scale > y_scale {
                Offset::new(0, half_overflow(scaled.height, target.height))
            } else {
                Offset::new(half_overflow(scaled.width, target.width), 0)
            };
            FitPlan {
                scaled,
                offset,
                op: DrawOp::Over,
            }
        }
    }
}

// The axis whose own scale equals `factor` is pinned to the target length so
// float error can never leave it one pixel short.
fn uniform_scale(
    source: Dimensions,
    target: Dimensions,
    x_scale: f64,
    y_scale: f64,
    factor: f64,
) -> Dimensions {
    let width = if x_scale == factor {
        target.width
    } else {
        truncate(factor * f64::from(source.width))
    };
    let height = if y_scale == factor {
        target.height
    } else {
        truncate(factor * f64::from(source.height))
    };
    Dimensions::new(width, height)
}

/// Truncates toward zero, saturating at the `u32` range.
fn truncate(value: f64) -> u32 {
    value.trunc() as u32
}

/// `(scaled - target) / 2`, with the division truncating toward zero.
fn half_overflow(scaled: u32, target: u32) -> i64 {
    (i64::from(scaled) - i64::from(target)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(sw: u32, sh: u32, tw: u32, th: u32, policy: ScalePolicy) -> FitPlan {
        resolve(Dimensions::new(sw, sh), Dimensions::new(tw, th), policy)
    }

    #[test]
    fn contain_landscape_into_square_pads_vertically() {
        let p = plan(1024, 768, 300, 300, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(300, 225));
        // (225 - 300) / 2 = -37: content starts at row 37
        assert_eq!(p.offset, Offset::new(0, -37));
        assert_eq!(p.op, DrawOp::Src);
    }

    #[test]
    fn contain_portrait_into_square_pads_horizontally() {
        let p = plan(400, 800, 200, 200, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(100, 200));
        assert_eq!(p.offset, Offset::new(-50, 0));
    }

    #[test]
    fn contain_never_exceeds_target() {
        for (sw, sh) in [(1024, 768), (768, 1024), (1, 1000), (1000, 1), (333, 777)] {
            let p = plan(sw, sh, 640, 480, ScalePolicy::Contain);
            assert!(p.scaled.width <= 640, "{sw}x{sh} -> {}", p.scaled);
            assert!(p.scaled.height <= 480, "{sw}x{sh} -> {}", p.scaled);
            assert!(p.scaled.width == 640 || p.scaled.height == 480);
        }
    }

    #[test]
    fn cover_landscape_crops_vertically() {
        let p = plan(1024, 768, 300, 200, ScalePolicy::Cover);
        assert_eq!(p.scaled, Dimensions::new(300, 225));
        assert_eq!(p.offset, Offset::new(0, 12));
        assert_eq!(p.op, DrawOp::Over);
    }

    #[test]
    fn cover_portrait_into_square_crops_vertically() {
        let p = plan(400, 800, 200, 200, ScalePolicy::Cover);
        assert_eq!(p.scaled, Dimensions::new(200, 400));
        assert_eq!(p.offset, Offset::new(0, 100));
    }

    #[test]
    fn cover_wide_source_crops_horizontally() {
        let p = plan(800, 200, 100, 100, ScalePolicy::Cover);
        assert_eq!(p.scaled, Dimensions::new(400, 100));
        assert_eq!(p.offset, Offset::new(150, 0));
    }

    #[test]
    fn cover_always_reaches_target() {
        for (sw, sh) in [(1024, 768), (768, 1024), (1, 1000), (1000, 1), (333, 777), (7, 3)] {
            let p = plan(sw, sh, 640, 480, ScalePolicy::Cover);
            assert!(p.scaled.width >= 640, "{sw}x{sh} -> {}", p.scaled);
            assert!(p.scaled.height >= 480, "{sw}x{sh} -> {}", p.scaled);
        }
    }

    #[test]
    fn contain_pins_driving_axis_when_product_falls_short() {
        // 61.0 / 7.0 * 7.0 == 60.999..., which would truncate to 60
        assert!((61.0_f64 / 7.0 * 7.0).trunc() < 61.0);

        let p = plan(7, 1, 61, 100, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(61, 8));
        assert_eq!(p.offset, Offset::new(0, -46));

        let p = plan(1, 7, 100, 61, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(8, 61));
        assert_eq!(p.offset, Offset::new(-46, 0));
    }

    #[test]
    fn cover_pins_driving_axis_when_product_falls_short() {
        let p = plan(7, 1, 61, 1, ScalePolicy::Cover);
        assert_eq!(p.scaled, Dimensions::new(61, 8));
        assert!(p.scaled.width >= 61 && p.scaled.height >= 1);
        assert_eq!(p.offset, Offset::new(0, 3));

        let p = plan(1, 7, 1, 61, ScalePolicy::Cover);
        assert_eq!(p.scaled, Dimensions::new(8, 61));
        assert_eq!(p.offset, Offset::new(3, 0));
    }

    #[test]
    fn offsets_truncate_toward_zero() {
        // 3x1 into 4x4: scaled 4x1, (1 - 4) / 2 = -1 (floor would give -2)
        let p = plan(3, 1, 4, 4, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(4, 1));
        assert_eq!(p.offset, Offset::new(0, -1));
    }

    #[test]
    fn matching_aspect_ratio_takes_the_else_branch() {
        // Equal scales: Contain offsets on y, Cover offsets on x; both are zero.
        let contain = plan(800, 600, 400, 300, ScalePolicy::Contain);
        assert_eq!(contain.scaled, Dimensions::new(400, 300));
        assert_eq!(contain.offset, Offset::ZERO);

        let cover = plan(800, 600, 400, 300, ScalePolicy::Cover);
        assert_eq!(cover.scaled, Dimensions::new(400, 300));
        assert_eq!(cover.offset, Offset::ZERO);
    }

    #[test]
    fn resize_is_anisotropic_and_exact() {
        let p = plan(1024, 768, 123, 456, ScalePolicy::Resize);
        assert_eq!(p.scaled, Dimensions::new(123, 456));
        assert_eq!(p.offset, Offset::ZERO);
        assert_eq!(p.op, DrawOp::Over);
    }

    #[test]
    fn zero_target_is_degenerate_not_an_error() {
        let p = plan(100, 50, 0, 0, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(0, 0));
        assert_eq!(p.offset, Offset::ZERO);

        let p = plan(100, 50, 0, 10, ScalePolicy::Contain);
        assert_eq!(p.scaled, Dimensions::new(0, 0));
        assert_eq!(p.offset, Offset::new(0, -5));

        let p = plan(100, 50, 0, 0, ScalePolicy::Cover);
        assert_eq!(p.scaled, Dimensions::new(0, 0));
    }
}
