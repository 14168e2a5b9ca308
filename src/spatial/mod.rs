//! Spatial data structures and pixel capabilities
//!
//! This module contains the geometry and buffer layer the engine works over:
//! - Half-open integer rectangles
//! - Read and write pixel capabilities, with an image-backed adapter
//! - The mutable output canvas with disjoint row-band access
//! - Infinite tiling over finite sources

/// The mutable output buffer
pub mod canvas;
/// Half-open integer rectangles
pub mod rect;
/// Pixel capability traits and the image-backed source
pub mod source;
/// Infinite tiling adapter over finite sources
pub mod tiled;

pub use canvas::Canvas;
pub use rect::Rect;
pub use source::{ImageSource, PixelSink, PixelSource};
pub use tiled::TiledSource;
