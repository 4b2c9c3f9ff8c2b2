//! # Tile reconciliation and track composition.
//!
//! Turns a [qcmosaic_core::models::Table] of per-tile run statistics into one merged
//! matrix per (feature, read, lane) track:
//!
//! - [shape::resolve] finds the largest tile, the shape every missing tile is filled with
//! - [sync::sync] pads two arrays with NaN so they can be concatenated
//! - [merge::merge_track] glues the tiles of a track together left to right
//! - [compose::compose] enumerates the tracks in mosaic order and masks low quality cells
//!
//! # Example
//!
//! ```no_run
//! use qcmosaic_core::models::{Table, TileLayout};
//! use qcmosaic_mosaic::{MosaicOptions, TileView, compose, resolve};
//!
//! let table = Table::load_stacked("run_stats.tsv").unwrap();
//! let shape = resolve(&table, TileLayout::Stacked);
//!
//! let source = TileView::new(&table, TileLayout::Stacked);
//! let tracks = compose(&source, &MosaicOptions::default(), shape).unwrap();
//! ```
pub mod compose;
pub mod errors;
pub mod masking;
pub mod merge;
pub mod models;
pub mod shape;
pub mod sync;

// re-exports
pub use compose::{compose, plan};
pub use errors::*;
pub use merge::{merge, merge_track};
pub use models::*;
pub use shape::{TileShape, resolve};
pub use sync::{SyncAxis, concat, sync};
