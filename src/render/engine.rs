//! The generation engine
//!
//! Each output row is an independent unit of work: no row reads or writes
//! another row's pixels, so rows fan out over worker threads and the result
//! is byte-identical at any thread count. Within a row, columns must be
//! visited in strictly increasing order — the color placed at `x` is read
//! from the same row at `x - part_size`, which an in-order pass has already
//! written.

use crate::depth::map::DepthMap;
use crate::io::error::{Result, invalid_parameter};
use crate::render::config::RenderConfig;
use crate::spatial::canvas::Canvas;
use crate::spatial::rect::Rect;
use crate::spatial::source::PixelSource;
use crate::spatial::tiled::TiledSource;
use image::Rgba;
use ndarray::ArrayViewMut1;
use std::num::NonZeroUsize;
use std::thread;

/// Render a stereogram using one worker per available core
///
/// The canvas must be pre-sized to `(depth width + part size, depth height)`
/// and is filled in place.
///
/// # Errors
///
/// Returns [`RenderError::InvalidParameter`](crate::RenderError) if the part
/// size cannot be resolved or the canvas dimensions do not match; no pixel
/// is written in either case.
pub fn render<D, P>(
    depth_map: &D,
    pattern: &P,
    config: &RenderConfig,
    canvas: &mut Canvas,
) -> Result<()>
where
    D: DepthMap + Sync,
    P: PixelSource + Sync,
{
    render_with_threads(depth_map, pattern, config, canvas, 0)
}

/// Render a stereogram on an explicit number of worker threads
///
/// A `threads` of 0 auto-detects; 1 renders on the calling thread. The
/// output does not depend on the thread count.
///
/// # Errors
///
/// As [`render`].
pub fn render_with_threads<D, P>(
    depth_map: &D,
    pattern: &P,
    config: &RenderConfig,
    canvas: &mut Canvas,
    threads: usize,
) -> Result<()>
where
    D: DepthMap + Sync,
    P: PixelSource + Sync,
{
    let part_size = config.resolved_part_size(pattern)?;
    let depth_bounds = depth_map.bounds();

    let expected_width = depth_bounds.width() + part_size as i64;
    let expected_height = depth_bounds.height();
    if canvas.width() as i64 != expected_width || canvas.height() as i64 != expected_height {
        return Err(invalid_parameter(
            "canvas",
            &format!("{}x{}", canvas.width(), canvas.height()),
            &format!("canvas must be exactly {expected_width}x{expected_height}"),
        ));
    }

    let pattern = TiledSource::new(pattern);
    let height = canvas.height();

    let threads = match threads {
        0 => thread::available_parallelism().map_or(1, NonZeroUsize::get),
        n => n,
    }
    .min(height.max(1));

    if threads <= 1 {
        for (index, mut band) in canvas.row_bands_mut(1).enumerate() {
            for mut row in band.outer_iter_mut() {
                render_row(&mut row, index as i64, depth_map, &pattern, depth_bounds, part_size);
            }
        }
        return Ok(());
    }

    let rows_per_band = height.div_ceil(threads);
    thread::scope(|scope| {
        for (band_index, band) in canvas.row_bands_mut(rows_per_band).enumerate() {
            let pattern = &pattern;
            let start_y = band_index * rows_per_band;
            scope.spawn(move || {
                let mut band = band;
                for (offset, mut row) in band.outer_iter_mut().enumerate() {
                    let y = (start_y + offset) as i64;
                    render_row(&mut row, y, depth_map, pattern, depth_bounds, part_size);
                }
            });
        }
    });

    Ok(())
}

// Fill one row left to right. The in-order pass is what makes the
// self-referential read at x - part_size valid: that column was written
// earlier in this same call.
fn render_row<D, P>(
    row: &mut ArrayViewMut1<'_, Rgba<u8>>,
    y: i64,
    depth_map: &D,
    pattern: &TiledSource<&P>,
    depth_bounds: Rect,
    part_size: usize,
) where
    D: DepthMap,
    P: PixelSource,
{
    for x in 0..row.len() {
        let src_x = x as i64 - part_size as i64;

        let depth = if depth_bounds.contains(src_x, y) {
            depth_map.depth_at(src_x, y)
        } else {
            0
        };

        // Columns past the leading part repeat the row; the part itself
        // draws from the tiled pattern.
        let color = usize::try_from(src_x)
            .ok()
            .and_then(|src| row.get(src).copied())
            .unwrap_or_else(|| pattern.color_at(x as i64, y));

        if let Some(pixel) = row.get_mut(x) {
            *pixel = color;
        }

        // The depth-encoding echo: the same color depth pixels to the left
        // links the two points at a perceived distance from the viewer.
        if let Ok(echo) = usize::try_from(x as i64 - depth) {
            if let Some(pixel) = row.get_mut(echo) {
                *pixel = color;
            }
        }
    }
}
