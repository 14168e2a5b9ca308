//! Image decode/encode adapters around the engine

use crate::io::error::{RenderError, Result};
use crate::spatial::canvas::Canvas;
use crate::spatial::source::ImageSource;
use std::path::Path;

/// Decode an image file into a [`PixelSource`](crate::spatial::PixelSource)
///
/// Any format the `image` crate recognizes is accepted; pixels are
/// normalized to 8-bit RGBA.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_source(path: &Path) -> Result<ImageSource> {
    let image = image::open(path).map_err(|e| RenderError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ImageSource::new(image.to_rgba8()))
}

/// Encode a rendered canvas as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas
        .to_image()
        .save(output_path)
        .map_err(|e| RenderError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
