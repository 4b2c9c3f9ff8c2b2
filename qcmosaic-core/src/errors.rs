use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Malformed tag '{tag}': expected 4 '_'-separated parts (feature_read_lane_tile), found {parts}")]
    MalformedTag { tag: String, parts: usize },

    #[error("Malformed tag '{tag}' on line {line}: expected 4 '_'-separated parts, found {parts}")]
    MalformedTagOnLine {
        line: usize,
        tag: String,
        parts: usize,
    },

    #[error("Corrupted file. 0 data lines found in the file: {0}")]
    EmptyInput(String),

    #[error("Can't parse value '{value}' on line {line}, column {column}")]
    ValueParse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TableResult<T> = std::result::Result<T, TableError>;
