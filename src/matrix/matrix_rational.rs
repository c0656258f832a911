use crate::error::MatrixError;
use crate::matrix::gauss_jordan;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::fraction::Fraction;
use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::PyType;

// Exact rational matrix exposed to Python, entries cross the boundary as
// strings such as "3", "-14/11".

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

#[derive(Debug, Clone)]
#[pyclass]
pub struct MatrixRational {
    inner: MatrixGen<Fraction>,
}

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        match &error {
            MatrixError::Singular(_) => PyZeroDivisionError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

#[pymethods]
impl MatrixRational {
    #[new]
    pub fn new(lines: Vec<Vec<String>>) -> PyResult<Self> {
        Ok(MatrixRational {
            inner: MatrixGen::from_list(parse_lines(&lines)?)?,
        })
    }

    #[classmethod]
    pub fn parse(_cls: &Bound<PyType>, text: &str) -> PyResult<Self> {
        Ok(MatrixRational {
            inner: text.parse()?,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<String>> {
        self.inner
            .to_list()
            .iter()
            .map(|line| line.iter().map(Fraction::to_string).collect())
            .collect()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[getter]
    pub fn augments(&self) -> usize {
        self.inner.augments()
    }

    /// Reduce in place. Raises `ZeroDivisionError` on a singular block, after
    /// which the matrix content is unspecified.
    pub fn eliminate(&mut self) -> PyResult<()> {
        self.inner.check_augmented()?;
        gauss_jordan::eliminate(&mut self.inner).map_err(MatrixError::from)?;
        Ok(())
    }

    pub fn is_reduced(&self) -> bool {
        self.inner.is_reduced()
    }

    pub fn augmented(&self) -> MatrixRational {
        MatrixRational {
            inner: self.inner.augmented(),
        }
    }

    pub fn solve(&self, target: Vec<String>) -> PyResult<Vec<String>> {
        let target = parse_lines(&[target])?.remove(0);
        let solution = gauss_jordan::solve(&self.inner, &target)?;
        Ok(solution.iter().map(Fraction::to_string).collect())
    }

    pub fn inverse(&self) -> PyResult<MatrixRational> {
        Ok(MatrixRational {
            inner: gauss_jordan::inverse(&self.inner)?,
        })
    }

    pub fn __mul__(&self, rhs: &MatrixRational) -> PyResult<MatrixRational> {
        Ok(MatrixRational {
            inner: (&self.inner * &rhs.inner)?,
        })
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("MatrixRational({:?})", self.to_list())
    }
}

fn parse_lines(lines: &[Vec<String>]) -> Result<Vec<Vec<Fraction>>, MatrixError> {
    lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, value)| {
                    value.parse::<Fraction>().map_err(|error| MatrixError::Parse {
                        row,
                        col,
                        message: error.to_string(),
                    })
                })
                .collect()
        })
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
