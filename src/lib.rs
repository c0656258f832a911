use pyo3::prelude::*;

pub mod error;

pub mod matrix {
    pub mod gauss_jordan;
    pub mod matrix;
    pub mod matrix_gen;
    pub mod matrix_rational;
}
pub mod rings {
    pub mod field;
    pub mod fraction;
}

pub use error::{MatrixError, ParseFractionError, SingularMatrix};
pub use matrix::gauss_jordan::{
    eliminate, eliminate_with, inverse, pivot_row, solve, EliminationConfig, Pivoting,
};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_gen::MatrixGen;
pub use rings::field::Field;
pub use rings::fraction::Fraction;

/// Exact Gauss-Jordan elimination over the rationals, for Python.
#[pymodule]
fn gauss_jordan(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::matrix_rational::MatrixRational>()?;
    Ok(())
}
