use crate::consts::MISSING_VALUE_TOKENS;
use crate::errors::{TableError, TableResult};

///
/// Row struct, the parsed values of one line of a run-stats table (tag excluded).
///
/// Missing-value tokens are stored as `NaN`. The row keeps only the fields that were
/// present on its line; padding to the table width happens on demand.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: Vec<f64>,
}

impl Row {
    pub fn new(values: Vec<f64>) -> Self {
        Row { values }
    }

    ///
    /// Parse the value fields of a line.
    ///
    /// # Arguments:
    /// - fields: the fields following the tag
    /// - line: 1-based line number, used in error messages
    pub fn parse(fields: &[&str], line: usize) -> TableResult<Self> {
        let values = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                parse_value(field).ok_or_else(|| TableError::ValueParse {
                    line,
                    // 1-based, the tag is column 1
                    column: i + 2,
                    value: field.to_string(),
                })
            })
            .collect::<TableResult<Vec<f64>>>()?;

        Ok(Row { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    ///
    /// Get the row extended (or cut) to `width` values, trailing cells filled with `NaN`.
    ///
    pub fn padded(&self, width: usize) -> Vec<f64> {
        let mut values: Vec<f64> = self.values.iter().copied().take(width).collect();
        values.resize(width, f64::NAN);
        values
    }
}

///
/// Parse a single field. Returns `None` if the field is neither numeric nor a
/// missing-value token.
///
pub fn parse_value(field: &str) -> Option<f64> {
    let field = field.trim();
    if MISSING_VALUE_TOKENS.contains(&field) {
        return Some(f64::NAN);
    }
    field.parse::<f64>().ok()
}
