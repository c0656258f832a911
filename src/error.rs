use thiserror::Error;

/// Every candidate in the pivot column, from the pivot row down, is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("singular matrix: no nonzero pivot in column {column}")]
pub struct SingularMatrix {
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Singular(#[from] SingularMatrix),

    #[error("matrix has no rows")]
    Empty,

    #[error("row {row} has {len} entries, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("a matrix with {rows} rows needs at least {rows} columns, got {cols}")]
    NotAugmented { rows: usize, cols: usize },

    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("dimensions not compatible: {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("invalid entry at row {row}, column {col}: {message}")]
    Parse {
        row: usize,
        col: usize,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
