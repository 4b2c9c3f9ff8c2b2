use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::TAG_SEPARATOR;
use crate::errors::TableError;

///
/// Tag struct, the row key of a run-stats table: `feature_read_lane_tile`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub feature: String,
    pub read: String,
    pub lane: String,
    pub tile: String,
}

impl Tag {
    pub fn new(feature: &str, read: &str, lane: &str, tile: &str) -> Self {
        Tag {
            feature: feature.to_string(),
            read: read.to_string(),
            lane: lane.to_string(),
            tile: tile.to_string(),
        }
    }

    ///
    /// Get the serialized form of the tag
    ///
    pub fn as_string(&self) -> String {
        compose(&self.feature, &self.read, &self.lane, &self.tile)
    }
}

///
/// Split a tag string into its four parts.
///
/// # Arguments:
/// - tag: a tag in the form `feature_read_lane_tile`
///
/// # Returns:
/// - the parsed [Tag], or [TableError::MalformedTag] if the tag does not have exactly
///   four parts.
pub fn decompose(tag: &str) -> Result<Tag, TableError> {
    let parts: Vec<&str> = tag.split(TAG_SEPARATOR).collect();
    match parts.as_slice() {
        [feature, read, lane, tile] => Ok(Tag::new(feature, read, lane, tile)),
        _ => Err(TableError::MalformedTag {
            tag: tag.to_string(),
            parts: parts.len(),
        }),
    }
}

///
/// Join the four parts of a tag with the tag separator.
///
pub fn compose(feature: &str, read: &str, lane: &str, tile: &str) -> String {
    [feature, read, lane, tile].join(&TAG_SEPARATOR.to_string())
}

impl FromStr for Tag {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decompose(s)
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
