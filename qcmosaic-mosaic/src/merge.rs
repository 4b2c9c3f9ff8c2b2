use log::trace;
use ndarray::Array2;

use crate::errors::{MosaicError, MosaicResult};
use crate::models::{TileView, TrackKey};
use crate::shape::TileShape;
use crate::sync::{SyncAxis, concat, sync};

///
/// Get the tile used to start a track: the first tile of `tile_ids`, or a NaN tile of
/// `tile_shape` if that tile is missing.
///
pub fn seed_tile(
    source: &TileView,
    tile_shape: TileShape,
    key: &TrackKey,
    tile_ids: &[String],
) -> MosaicResult<Array2<f64>> {
    let first = tile_ids
        .first()
        .ok_or_else(|| MosaicError::NoTiles(key.title()))?;

    Ok(source
        .tile(&key.tag(first))
        .unwrap_or_else(|| tile_shape.nan_tile()))
}

///
/// Merge the tiles of one track horizontally, starting from `seed`.
///
/// `tile_ids` must already be sorted; `seed` stands for `tile_ids[0]` and every later tile
/// is appended to its right. A missing tile becomes a NaN block of `tile_shape` so the
/// following tiles keep their column positions. Before each append both sides are padded
/// with NaN rows to the same height.
///
/// # Arguments:
/// - source: the table and tile layout to look tiles up in
/// - seed: the first tile of the track
/// - tile_shape: shape used for missing tiles
/// - key: the (feature, read, lane) of the track
/// - tile_ids: every tile id, in track order
///
/// # Returns:
/// - the merged matrix, or [MosaicError::NoTiles] if `tile_ids` is empty
pub fn merge(
    source: &TileView,
    seed: Array2<f64>,
    tile_shape: TileShape,
    key: &TrackKey,
    tile_ids: &[String],
) -> MosaicResult<Array2<f64>> {
    if tile_ids.is_empty() {
        return Err(MosaicError::NoTiles(key.title()));
    }

    let mut merged = seed;
    for tile_id in tile_ids.iter().skip(1) {
        let tag = key.tag(tile_id);
        let tile = match source.tile(&tag) {
            Some(tile) => tile,
            None => {
                trace!("{} is missing, filling with NaN", tag);
                tile_shape.nan_tile()
            }
        };

        let (left, right) = sync(merged, tile, SyncAxis::Rows);
        merged = concat(left, right, SyncAxis::Columns)?;
    }

    Ok(merged)
}

///
/// Build the merged matrix of one track, seeding it from its first tile.
///
pub fn merge_track(
    source: &TileView,
    tile_shape: TileShape,
    key: &TrackKey,
    tile_ids: &[String],
) -> MosaicResult<Array2<f64>> {
    let seed = seed_tile(source, tile_shape, key, tile_ids)?;
    merge(source, seed, tile_shape, key, tile_ids)
}
