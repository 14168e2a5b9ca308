//! Depth maps: per-coordinate distance from the background plane
//!
//! Depth zero is the background; positive depths sit nearer the viewer,
//! negative depths behind. The closed set of implementors is an adapter that
//! derives depth from image luminance and a uniform synthetic map.

/// Depth derived from a pixel source's channel values
pub mod image;
/// The depth capability and synthetic maps
pub mod map;

pub use image::ImageDepthMap;
pub use map::{DepthMap, UniformDepth};
