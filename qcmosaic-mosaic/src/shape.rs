use std::fmt::{self, Display};

use ndarray::Array2;

use qcmosaic_core::models::{Table, TileLayout};

///
/// The largest tile width (`max_x`, columns) and height (`max_y`, rows) seen in a table.
/// Missing tiles are synthesized with exactly this shape.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileShape {
    pub max_x: usize,
    pub max_y: usize,
}

impl TileShape {
    pub fn new(max_x: usize, max_y: usize) -> Self {
        TileShape { max_x, max_y }
    }

    ///
    /// An all-NaN tile of this shape: `max_y` rows by `max_x` columns.
    ///
    pub fn nan_tile(&self) -> Array2<f64> {
        Array2::from_elem((self.max_y, self.max_x), f64::NAN)
    }

    pub fn is_empty(&self) -> bool {
        self.max_x == 0 || self.max_y == 0
    }
}

impl Display for TileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.max_x, self.max_y)
    }
}

///
/// Scan every tag of the table and find the largest tile width and height.
///
/// # Arguments:
/// - table: the loaded table
/// - layout: how each tag's rows are shaped into a tile
///
/// # Returns:
/// - the [TileShape]; `(0, 0)` for an empty table
pub fn resolve(table: &Table, layout: TileLayout) -> TileShape {
    table
        .tags()
        .filter_map(|tag| table.tile(tag, layout))
        .fold(TileShape::default(), |shape, tile| {
            let (rows, cols) = tile.dim();
            TileShape {
                max_x: shape.max_x.max(cols),
                max_y: shape.max_y.max(rows),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::num::NonZeroUsize;

    use pretty_assertions::assert_eq;
    use qcmosaic_core::models::{Row, Tag};
    use rstest::*;

    #[rstest]
    fn test_resolve_empty_table() {
        let table = Table::default();
        let shape = resolve(&table, TileLayout::Stacked);
        assert_eq!(shape, TileShape::new(0, 0));
        assert!(shape.is_empty());
    }

    #[rstest]
    fn test_resolve_stacked_tiles() {
        let mut table = Table::default();
        let tag = Tag::new("QUAL", "1", "1", "1");
        table.push(tag.clone(), Row::new(vec![1.0, 2.0]));
        table.push(tag, Row::new(vec![3.0]));
        table.push(Tag::new("QUAL", "1", "1", "2"), Row::new(vec![1.0, 2.0, 3.0]));

        // stacked tiles are as wide as the widest line
        let shape = resolve(&table, TileLayout::Stacked);
        assert_eq!(shape, TileShape::new(3, 2));
    }

    #[rstest]
    fn test_resolve_row_major_tiles() {
        let table = Table::from_rows(vec![
            (Tag::new("LEN", "1", "1", "1"), vec![1.0; 4]),
            (Tag::new("LEN", "1", "1", "2"), vec![1.0; 6]),
        ]);
        let layout = TileLayout::RowMajor {
            columns: NonZeroUsize::new(2).unwrap(),
        };

        assert_eq!(resolve(&table, layout), TileShape::new(2, 3));
    }

    #[rstest]
    fn test_nan_tile_shape() {
        let tile = TileShape::new(3, 2).nan_tile();
        assert_eq!(tile.dim(), (2, 3));
        assert!(tile.iter().all(|v| v.is_nan()));
    }
}
