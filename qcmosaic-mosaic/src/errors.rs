use thiserror::Error;

#[derive(Error, Debug)]
pub enum MosaicError {
    #[error(
        "Can't concatenate a {left_rows}x{left_cols} array with a {right_rows}x{right_cols} array along axis {axis}"
    )]
    ShapeMismatch {
        axis: usize,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("Invalid mode: {0}. Must be one of `by_feature` or `by_lane`")]
    InvalidMode(String),

    #[error("Invalid axis: {0}. Only 0 (rows) and 1 (columns) are supported")]
    InvalidAxis(usize),

    #[error("No tiles to merge for track {0}")]
    NoTiles(String),
}

pub type MosaicResult<T> = std::result::Result<T, MosaicError>;
