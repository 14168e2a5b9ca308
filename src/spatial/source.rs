//! Pixel capability traits and the image-backed source adapter

use crate::spatial::rect::Rect;
use image::{Rgba, RgbaImage};

/// Read access to a rectangular (possibly unbounded) field of pixels
///
/// Finite implementors answer for every coordinate but only guarantee
/// meaningful colors inside [`bounds`](PixelSource::bounds); infinite
/// implementors are defined everywhere. Sampling never mutates the source,
/// so repeated reads of one coordinate always agree.
pub trait PixelSource {
    /// The region this source considers its own
    fn bounds(&self) -> Rect;

    /// The color at `(x, y)`
    fn color_at(&self, x: i64, y: i64) -> Rgba<u8>;
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba<u8> {
        (**self).color_at(x, y)
    }
}

/// Write access layered over a pixel source
///
/// Out-of-range writes are a defined no-op rather than a fault.
pub trait PixelSink: PixelSource {
    /// Replace the color at `(x, y)`, ignoring coordinates outside bounds
    fn set_color_at(&mut self, x: i64, y: i64, color: Rgba<u8>);
}

/// A decoded raster image exposed as a [`PixelSource`]
///
/// Bounds are anchored at the origin. Coordinates outside the image read as
/// transparent black, which derived depth treats as the background plane.
#[derive(Debug, Clone)]
pub struct ImageSource {
    image: RgbaImage,
}

impl ImageSource {
    /// Wrap a decoded RGBA image
    pub const fn new(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl From<RgbaImage> for ImageSource {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

impl PixelSource for ImageSource {
    fn bounds(&self) -> Rect {
        Rect::from_size(i64::from(self.image.width()), i64::from(self.image.height()))
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba<u8> {
        if self.bounds().contains(x, y) {
            self.image
                .get_pixel_checked(x as u32, y as u32)
                .copied()
                .unwrap_or(Rgba([0, 0, 0, 0]))
        } else {
            Rgba([0, 0, 0, 0])
        }
    }
}
