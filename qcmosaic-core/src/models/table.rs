use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use log::debug;
use ndarray::Array2;

use crate::consts::FIELD_SEPARATOR;
use crate::errors::{TableError, TableResult};
use crate::models::row::Row;
use crate::models::tag::{Tag, decompose};
use crate::models::tag_sets::TagSets;
use crate::models::tile::TileLayout;
use crate::utils::read_data_lines;

///
/// Table struct, the in-memory representation of a run-stats file: a mapping from
/// [Tag] to the rows stored under it.
///
/// `max_n` is the largest number of tab-separated fields on any line (tag included),
/// so every row is logically `max_n - 1` values wide.
///
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: FxHashMap<Tag, Vec<Row>>,
    max_n: usize,
    pub path: Option<PathBuf>,
}

/// What to do when a tag shows up on more than one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DuplicateTags {
    LastWins,
    Stack,
}

impl Table {
    ///
    /// Load a table with one row per tag. A tag seen twice keeps the last line.
    ///
    /// # Arguments:
    /// - path: path to a tab-separated, header-less file (optionally gzipped)
    pub fn load<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        Self::load_with(path.as_ref(), DuplicateTags::LastWins)
    }

    ///
    /// Load a table where every line sharing a tag is one row of that tag's tile,
    /// kept in file order. Use together with [TileLayout::Stacked].
    ///
    pub fn load_stacked<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        Self::load_with(path.as_ref(), DuplicateTags::Stack)
    }

    fn load_with(path: &Path, duplicates: DuplicateTags) -> TableResult<Self> {
        let lines = read_data_lines(path)?;

        if lines.is_empty() {
            return Err(TableError::EmptyInput(path.display().to_string()));
        }

        // first pass: the widest line fixes the column count
        let max_n = lines
            .iter()
            .map(|(_, line)| line.split(FIELD_SEPARATOR).count())
            .max()
            .unwrap_or(0);

        let mut rows: FxHashMap<Tag, Vec<Row>> = FxHashMap::default();
        for (line_no, line) in lines.iter() {
            let mut fields = line.split(FIELD_SEPARATOR);
            let raw_tag = fields.next().unwrap_or_default();

            let tag = decompose(raw_tag).map_err(|e| match e {
                TableError::MalformedTag { tag, parts } => TableError::MalformedTagOnLine {
                    line: *line_no,
                    tag,
                    parts,
                },
                other => other,
            })?;

            let values: Vec<&str> = fields.collect();
            let row = Row::parse(&values, *line_no)?;

            match duplicates {
                DuplicateTags::LastWins => {
                    rows.insert(tag, vec![row]);
                }
                DuplicateTags::Stack => {
                    rows.entry(tag).or_default().push(row);
                }
            }
        }

        debug!(
            "Loaded {} tags from {} lines of {} (max fields: {})",
            rows.len(),
            lines.len(),
            path.display(),
            max_n
        );

        Ok(Table {
            rows,
            max_n,
            path: Some(path.to_path_buf()),
        })
    }

    ///
    /// Build a table from in-memory rows, one row per tag, last write wins.
    ///
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Tag, Vec<f64>)>,
    {
        let mut table = Table::default();
        for (tag, values) in rows {
            table.insert(tag, Row::new(values));
        }
        table
    }

    ///
    /// Replace the rows stored under `tag` with a single row.
    ///
    pub fn insert(&mut self, tag: Tag, row: Row) {
        self.max_n = self.max_n.max(row.len() + 1);
        self.rows.insert(tag, vec![row]);
    }

    ///
    /// Append a row to the rows stored under `tag`.
    ///
    pub fn push(&mut self, tag: Tag, row: Row) {
        self.max_n = self.max_n.max(row.len() + 1);
        self.rows.entry(tag).or_default().push(row);
    }

    pub fn get(&self, tag: &Tag) -> Option<&[Row]> {
        self.rows.get(tag).map(|rows| rows.as_slice())
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.rows.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.rows.keys()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn max_n(&self) -> usize {
        self.max_n
    }

    ///
    /// Number of value columns every row is padded to.
    ///
    pub fn width(&self) -> usize {
        self.max_n.saturating_sub(1)
    }

    ///
    /// Decompose every tag once into its feature, read, lane and tile sets.
    ///
    pub fn tag_sets(&self) -> TagSets {
        TagSets::from_tags(self.tags())
    }

    ///
    /// Get the 2-D tile stored under `tag`, shaped according to `layout`.
    ///
    /// # Returns:
    /// - `None` if the tag is not in the table
    pub fn tile(&self, tag: &Tag, layout: TileLayout) -> Option<Array2<f64>> {
        let rows = self.rows.get(tag)?;

        let tile = match layout {
            TileLayout::Stacked => {
                let width = self.width();
                let data: Vec<f64> = rows.iter().flat_map(|row| row.padded(width)).collect();
                Array2::from_shape_vec((rows.len(), width), data)
            }
            TileLayout::RowMajor { columns } => {
                let columns = columns.get();
                let mut data: Vec<f64> = rows
                    .iter()
                    .flat_map(|row| row.values.iter().copied())
                    .collect();
                let height = data.len().div_ceil(columns);
                data.resize(height * columns, f64::NAN);
                Array2::from_shape_vec((height, columns), data)
            }
        };

        // the data vectors are sized from the shape above
        tile.ok()
    }
}
