use thiserror::Error;

/// Errors raised by grid construction and cell accessors.
///
/// Every failing call leaves the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfRange {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("pattern row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unexpected symbol {symbol:?} at row {row}, column {column}")]
    UnexpectedSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
}
