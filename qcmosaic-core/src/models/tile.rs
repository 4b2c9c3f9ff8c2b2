use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::num::NonZeroUsize;
use std::str::FromStr;

///
/// How the data stored under one tag becomes a 2-D tile.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileLayout {
    /// One row per tag holding the tile flattened row-major; `columns` is the tile width.
    RowMajor { columns: NonZeroUsize },
    /// Every line carrying the tag is one tile row, in file order. This is what the
    /// run-stats collector writes.
    #[default]
    Stacked,
}

///
/// Ordering of tile identifiers along a track.
///
/// Tile ids are strings. `Lexical` sorts them as strings, so `"10"` comes before `"2"`.
/// `Numeric` compares ids that parse as unsigned integers by value, and places them before
/// any non-numeric id (those compare lexically among themselves).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileOrder {
    #[default]
    Numeric,
    Lexical,
}

impl TileOrder {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            TileOrder::Lexical => a.cmp(b),
            TileOrder::Numeric => match (a.parse::<u64>(), b.parse::<u64>()) {
                // "01" and "1" are equal by value, fall back to the string so the order is total
                (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
                (Ok(_), Err(_)) => Ordering::Less,
                (Err(_), Ok(_)) => Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            },
        }
    }

    ///
    /// Sort tile ids in place.
    ///
    pub fn sort(&self, ids: &mut [String]) {
        ids.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for TileOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(TileOrder::Numeric),
            "lexical" => Ok(TileOrder::Lexical),
            _ => Err(format!("Invalid tile order: {}", s)),
        }
    }
}

impl Display for TileOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileOrder::Numeric => write!(f, "numeric"),
            TileOrder::Lexical => write!(f, "lexical"),
        }
    }
}
