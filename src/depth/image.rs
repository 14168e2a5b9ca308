//! Depth derived from a pixel source's channel values

use crate::depth::map::DepthMap;
use crate::io::error::{Result, invalid_parameter};
use crate::render::config::RenderConfig;
use crate::spatial::rect::Rect;
use crate::spatial::source::PixelSource;
use image::Rgba;

/// Derives depth from an ordinary raster image
///
/// Brighter pixels read as nearer: the depth is the brightest channel scaled
/// into `[0, max_depth]`, with solid black on the background plane. Alpha is
/// ignored. The flat transform snaps every non-background pixel to
/// `max_depth` before the inverse transform reverses the near/far mapping,
/// so a flat map still honors the inverse viewing convention.
#[derive(Debug, Clone)]
pub struct ImageDepthMap<S> {
    source: S,
    max_depth: i64,
    flat: bool,
    inverse: bool,
}

impl<S: PixelSource> ImageDepthMap<S> {
    /// Wrap a pixel source using the depth settings in `config`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameter`](crate::RenderError) if
    /// `config.max_depth` is not positive.
    pub fn new(source: S, config: &RenderConfig) -> Result<Self> {
        if config.max_depth <= 0 {
            return Err(invalid_parameter(
                "max_depth",
                &config.max_depth,
                &"maximum depth must be positive",
            ));
        }

        Ok(Self {
            source,
            max_depth: config.max_depth,
            flat: config.flat,
            inverse: config.inverse,
        })
    }
}

impl<S: PixelSource> DepthMap for ImageDepthMap<S> {
    fn bounds(&self) -> Rect {
        self.source.bounds()
    }

    fn depth_at(&self, x: i64, y: i64) -> i64 {
        let Rgba([r, g, b, _]) = self.source.color_at(x, y);
        let value = i64::from(r.max(g).max(b));

        let mut depth = value * self.max_depth / 255;
        if self.flat && depth != 0 {
            depth = self.max_depth;
        }
        if self.inverse {
            depth = self.max_depth - depth;
        }

        depth
    }
}
