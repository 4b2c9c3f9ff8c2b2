//! # Core data structures for per-tile run statistics.
//!
//! Run-stats files are header-less, tab-separated tables keyed by a four part tag,
//! `feature_read_lane_tile`. This crate parses those tags, loads the (possibly ragged)
//! tables into a [Table] of typed rows, and derives the feature/read/lane/tile sets
//! that downstream crates enumerate.
//!
//! # Example
//!
//! ```no_run
//! use qcmosaic_core::models::{Table, TileLayout, Tag};
//!
//! let table = Table::load_stacked("run_stats.tsv").unwrap();
//! let sets = table.tag_sets();
//!
//! let tile = table.tile(&Tag::new("QUAL", "1", "1", "1101"), TileLayout::Stacked);
//! ```
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::*;
pub use models::*;
