//! The mutable output buffer the engine renders into
//!
//! Storage is a dense `(rows, cols)` array of RGBA pixels. Rows never depend
//! on each other during rendering, so the canvas can hand out disjoint
//! mutable bands of whole rows for worker threads without any locking.

use crate::spatial::rect::Rect;
use crate::spatial::source::{PixelSink, PixelSource};
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::{Array2, ArrayViewMut2, Axis};

/// A fixed-size, origin-anchored RGBA pixel buffer
///
/// Created opaque black; all access is bounds-checked, and out-of-range
/// writes are silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<Rgba<u8>>,
}

impl Canvas {
    /// Create a canvas of the given size, filled with opaque black
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), Rgba([0, 0, 0, 255])),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Split the canvas into disjoint mutable bands of at most
    /// `rows_per_band` whole rows each, in top-to-bottom order
    ///
    /// The bands borrow non-overlapping storage, so each may be handed to a
    /// separate worker thread.
    pub fn row_bands_mut(
        &mut self,
        rows_per_band: usize,
    ) -> impl Iterator<Item = ArrayViewMut2<'_, Rgba<u8>>> {
        self.pixels
            .axis_chunks_iter_mut(Axis(0), rows_per_band.max(1))
    }

    /// Copy the pixels into an [`RgbaImage`] for encoding
    pub fn to_image(&self) -> RgbaImage {
        let (width, height) = (self.width() as u32, self.height() as u32);
        ImageBuffer::from_fn(width, height, |x, y| {
            self.pixels
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or(Rgba([0, 0, 0, 255]))
        })
    }
}

impl PixelSource for Canvas {
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width() as i64, self.height() as i64)
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba<u8> {
        let index = (usize::try_from(y), usize::try_from(x));
        if let (Ok(row), Ok(col)) = index {
            self.pixels
                .get((row, col))
                .copied()
                .unwrap_or(Rgba([0, 0, 0, 0]))
        } else {
            Rgba([0, 0, 0, 0])
        }
    }
}

impl PixelSink for Canvas {
    fn set_color_at(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let index = (usize::try_from(y), usize::try_from(x));
        if let (Ok(row), Ok(col)) = index {
            if let Some(pixel) = self.pixels.get_mut((row, col)) {
                *pixel = color;
            }
        }
    }
}
