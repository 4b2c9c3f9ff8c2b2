use std::fmt::{self, Display};
use std::str::FromStr;

use ndarray::Array2;

use qcmosaic_core::consts::QUAL_FEATURE;
use qcmosaic_core::models::{Table, Tag, TileLayout, TileOrder};

use crate::errors::MosaicError;

///
/// A table together with the layout used to shape its tiles.
///
#[derive(Debug, Clone, Copy)]
pub struct TileView<'a> {
    pub table: &'a Table,
    pub layout: TileLayout,
}

impl<'a> TileView<'a> {
    pub fn new(table: &'a Table, layout: TileLayout) -> Self {
        TileView { table, layout }
    }

    pub fn tile(&self, tag: &Tag) -> Option<Array2<f64>> {
        self.table.tile(tag, self.layout)
    }
}

///
/// The (feature, read, lane) triple a track is built for.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackKey {
    pub feature: String,
    pub read: String,
    pub lane: String,
}

impl TrackKey {
    pub fn new(feature: &str, read: &str, lane: &str) -> Self {
        TrackKey {
            feature: feature.to_string(),
            read: read.to_string(),
            lane: lane.to_string(),
        }
    }

    ///
    /// The tag of one tile of this track.
    ///
    pub fn tag(&self, tile: &str) -> Tag {
        Tag::new(&self.feature, &self.read, &self.lane, tile)
    }

    pub fn title(&self) -> String {
        format!("{} R{} L{}", self.feature, self.read, self.lane)
    }

    pub fn is_quality(&self) -> bool {
        self.feature == QUAL_FEATURE
    }
}

impl Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

///
/// One rendered strip of the mosaic: every tile of a (feature, read, lane) triple,
/// merged left to right.
///
#[derive(Debug, Clone)]
pub struct Track {
    pub key: TrackKey,
    pub title: String,
    pub matrix: Array2<f64>,
}

impl Track {
    pub fn new(key: TrackKey, matrix: Array2<f64>) -> Self {
        let title = key.title();
        Track { key, title, matrix }
    }

    pub fn feature(&self) -> &str {
        &self.key.feature
    }

    pub fn dim(&self) -> (usize, usize) {
        self.matrix.dim()
    }
}

///
/// The nesting used when enumerating tracks; it fixes the vertical order of the mosaic.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeMode {
    /// features, then reads, then lanes
    #[default]
    ByFeature,
    /// lanes, then reads, then features
    ByLane,
}

impl FromStr for ComposeMode {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by_feature" => Ok(ComposeMode::ByFeature),
            "by_lane" => Ok(ComposeMode::ByLane),
            _ => Err(MosaicError::InvalidMode(s.to_string())),
        }
    }
}

impl Display for ComposeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeMode::ByFeature => write!(f, "by_feature"),
            ComposeMode::ByLane => write!(f, "by_lane"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityBounds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for QualityBounds {
    fn default() -> Self {
        QualityBounds {
            lower: 30.0,
            upper: 40.0,
        }
    }
}

///
/// What to compose. `None` filters mean "everything in the table".
///
#[derive(Debug, Clone, Default)]
pub struct MosaicOptions {
    pub mode: ComposeMode,
    pub features: Option<Vec<String>>,
    pub lanes: Option<Vec<String>>,
    pub reads: Option<Vec<String>>,
    pub mask_qual: bool,
    pub quality: QualityBounds,
    pub tile_order: TileOrder,
}
