use std::collections::BTreeSet;

use crate::models::tag::Tag;
use crate::models::tile::TileOrder;

///
/// The distinct features, reads, lanes and tiles found in a set of tags.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagSets {
    pub features: BTreeSet<String>,
    pub reads: BTreeSet<String>,
    pub lanes: BTreeSet<String>,
    pub tiles: BTreeSet<String>,
}

impl TagSets {
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a Tag>,
    {
        let mut sets = TagSets::default();
        for tag in tags {
            sets.features.insert(tag.feature.clone());
            sets.reads.insert(tag.read.clone());
            sets.lanes.insert(tag.lane.clone());
            sets.tiles.insert(tag.tile.clone());
        }
        sets
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    ///
    /// Get the tile ids sorted with the given ordering.
    ///
    pub fn sorted_tiles(&self, order: TileOrder) -> Vec<String> {
        let mut tiles: Vec<String> = self.tiles.iter().cloned().collect();
        order.sort(&mut tiles);
        tiles
    }
}
