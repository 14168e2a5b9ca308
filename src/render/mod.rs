//! Stereogram generation
//!
//! This module contains the rendering core:
//! - Render configuration and precondition validation
//! - The row-parallel generation engine

/// Render configuration and part-size resolution
pub mod config;
/// The generation engine
pub mod engine;

pub use config::RenderConfig;
pub use engine::{render, render_with_threads};
