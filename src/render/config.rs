//! Render configuration and part-size resolution

use crate::io::configuration::{DEFAULT_MAX_DEPTH, DEFAULT_PART_SIZE, MAX_PART_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::source::PixelSource;

/// Options for one stereogram render
///
/// Immutable for the duration of a render call. `max_depth`, `flat`, and
/// `inverse` configure image-derived depth maps; `part_size` is the width of
/// the repeating unit the engine offsets against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of the repeating unit; 0 means use the pattern's native width
    pub part_size: usize,
    /// Depth assigned to a full-brightness pixel
    pub max_depth: i64,
    /// Snap every non-background pixel to `max_depth`
    pub flat: bool,
    /// Reverse the near/far mapping
    pub inverse: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            part_size: DEFAULT_PART_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            flat: false,
            inverse: false,
        }
    }
}

impl RenderConfig {
    /// Resolve the repeat-unit width against the pattern in use
    ///
    /// A `part_size` of 0 takes the pattern's native width, which only
    /// exists for finite patterns.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameter`](crate::RenderError) if the
    /// resolved width is zero or exceeds [`MAX_PART_SIZE`] (an infinite
    /// pattern has no usable native width).
    pub fn resolved_part_size(&self, pattern: &impl PixelSource) -> Result<usize> {
        let part_size = if self.part_size == 0 {
            usize::try_from(pattern.bounds().width()).unwrap_or(usize::MAX)
        } else {
            self.part_size
        };

        if part_size == 0 || part_size > MAX_PART_SIZE {
            return Err(invalid_parameter(
                "part_size",
                &part_size,
                &format!("part size must be between 1 and {MAX_PART_SIZE}"),
            ));
        }

        Ok(part_size)
    }
}
