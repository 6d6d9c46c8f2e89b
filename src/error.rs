use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown zone type '{symbol}' at row {row}, column {col}")]
    UnknownZone { symbol: String, row: usize, col: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config is missing '{0}'")]
    Missing(&'static str),

    #[error("unable to parse integer for '{key}' from '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("refresh rate must be greater than zero")]
    ZeroRefreshRate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("engine refresh rate must be greater than zero")]
    ZeroRefreshRate,
}
