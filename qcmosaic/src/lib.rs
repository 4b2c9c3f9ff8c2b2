//! Umbrella crate for the qcmosaic workspace. Enable the parts you need:
//!
//! - `core`: tags, run-stats tables and tile layouts
//! - `mosaic`: tile shape resolution, array synchronization, track merging and composition
//! - `render`: PNG and `.npy` output
#[cfg(feature = "core")]
#[doc(inline)]
pub use qcmosaic_core as core;

#[cfg(feature = "mosaic")]
#[doc(inline)]
pub use qcmosaic_mosaic as mosaic;

#[cfg(feature = "render")]
#[doc(inline)]
pub use qcmosaic_render as render;
