use std::collections::BTreeSet;

use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use qcmosaic_core::models::TagSets;

use crate::errors::MosaicResult;
use crate::masking::mask_low_quality;
use crate::merge::merge_track;
use crate::models::{ComposeMode, MosaicOptions, TileView, Track, TrackKey};
use crate::shape::TileShape;

///
/// Keep the requested values that exist in `available`.
///
/// With no request every available value is returned, in sorted order. An explicit
/// request keeps its own order; unknown and repeated values are dropped.
///
pub fn select(requested: Option<&[String]>, available: &BTreeSet<String>) -> Vec<String> {
    match requested {
        None => available.iter().cloned().collect(),
        Some(requested) => {
            let mut selected: Vec<String> = Vec::with_capacity(requested.len());
            for value in requested {
                if available.contains(value) && !selected.contains(value) {
                    selected.push(value.clone());
                }
            }
            selected
        }
    }
}

fn joined(values: &[String]) -> String {
    values.join(" ")
}

///
/// Enumerate the tracks to compose, in mosaic order (top to bottom).
///
/// `ByFeature` nests features, reads, lanes; `ByLane` nests lanes, reads, features.
/// Reads are always sorted. Returns an empty plan if nothing matches the filters.
///
pub fn plan(sets: &TagSets, options: &MosaicOptions) -> Vec<TrackKey> {
    let features = select(options.features.as_deref(), &sets.features);
    let lanes = select(options.lanes.as_deref(), &sets.lanes);
    let mut reads = select(options.reads.as_deref(), &sets.reads);
    reads.sort();

    info!(
        "Plot F = {} R = {} L = {} T = {}",
        joined(&features),
        joined(&reads),
        joined(&lanes),
        sets.tiles.len()
    );

    if features.is_empty() || lanes.is_empty() || reads.is_empty() {
        return Vec::new();
    }

    let (outer, inner) = match options.mode {
        ComposeMode::ByFeature => (&features, &lanes),
        ComposeMode::ByLane => (&lanes, &features),
    };

    let mut keys = Vec::with_capacity(features.len() * lanes.len() * reads.len());
    for v1 in outer.iter() {
        for read in reads.iter() {
            for v2 in inner.iter() {
                let (feature, lane) = match options.mode {
                    ComposeMode::ByFeature => (v1, v2),
                    ComposeMode::ByLane => (v2, v1),
                };
                keys.push(TrackKey::new(feature, read, lane));
            }
        }
    }

    keys
}

fn build_track(
    source: &TileView,
    options: &MosaicOptions,
    tile_shape: TileShape,
    key: &TrackKey,
    tile_ids: &[String],
) -> MosaicResult<Track> {
    debug!("Merging {}", key);
    let mut matrix = merge_track(source, tile_shape, key, tile_ids)?;

    if options.mask_qual && key.is_quality() {
        mask_low_quality(&mut matrix, options.quality.lower);
    }

    Ok(Track::new(key.clone(), matrix))
}

///
/// Compose every requested (feature, read, lane) track of a table.
///
/// # Arguments:
/// - source: the table and the layout used to shape its tiles
/// - options: mode, filters and quality masking
/// - tile_shape: shape used for missing tiles, see [crate::shape::resolve]
///
/// # Returns:
/// - the tracks in mosaic order; empty when there is nothing to plot
pub fn compose(
    source: &TileView,
    options: &MosaicOptions,
    tile_shape: TileShape,
) -> MosaicResult<Vec<Track>> {
    let sets = source.table.tag_sets();
    let tile_ids = sets.sorted_tiles(options.tile_order);

    info!(
        "Data F = {} R = {} L = {} T = {}",
        sets.features.iter().cloned().collect::<Vec<_>>().join(" "),
        sets.reads.iter().cloned().collect::<Vec<_>>().join(" "),
        sets.lanes.iter().cloned().collect::<Vec<_>>().join(" "),
        tile_ids.len()
    );

    let keys = plan(&sets, options);
    if keys.is_empty() {
        warn!("Nothing to plot.");
        return Ok(Vec::new());
    }

    #[cfg(feature = "parallel")]
    let tracks = keys
        .par_iter()
        .map(|key| build_track(source, options, tile_shape, key, &tile_ids))
        .collect::<MosaicResult<Vec<Track>>>()?;

    #[cfg(not(feature = "parallel"))]
    let tracks = keys
        .iter()
        .map(|key| build_track(source, options, tile_shape, key, &tile_ids))
        .collect::<MosaicResult<Vec<Track>>>()?;

    Ok(tracks)
}
