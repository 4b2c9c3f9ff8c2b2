//! # Output for composed run-stats mosaics.
//!
//! The composer hands over an ordered list of tracks; this crate turns them into
//! something a person or another tool can look at:
//!
//! - [PngMosaicRenderer] draws all tracks as one heatmap image
//! - [NpyTrackWriter] writes one `.npy` array per track plus a JSON manifest
//!
//! Colours come from a [RenderConfig], which maps each feature to a [Colormap] and
//! its colour limits.
pub mod colormap;
pub mod config;
pub mod consts;
pub mod errors;
pub mod npy;
pub mod png;
pub mod renderer;

// re-exports
pub use colormap::Colormap;
pub use config::{ColorScale, RenderConfig};
pub use errors::*;
pub use npy::NpyTrackWriter;
pub use png::PngMosaicRenderer;
pub use renderer::TrackRenderer;
