use crate::error::{MatrixError, SingularMatrix};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::rings::field::Field;
use tracing::{debug, instrument, trace};

/// How the pivot row is picked among the candidates of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Largest absolute value; the earliest row wins a tie.
    #[default]
    Partial,
    /// First nonzero entry from the pivot row down.
    FirstNonZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EliminationConfig {
    pub pivoting: Pivoting,
}

impl EliminationConfig {
    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }
}

/// Row holding the pivot for `column`, scanning from row `column` down.
/// `None` when every candidate is zero.
pub fn pivot_row<T: Field, M: Matrix<T>>(
    matrix: &M,
    column: usize,
    pivoting: Pivoting,
) -> Option<usize> {
    let candidates = column..matrix.rows();

    match pivoting {
        Pivoting::Partial => {
            let mut best: Option<(usize, T)> = None;
            for row in candidates {
                let value = matrix.at(row, column).abs();
                if value.is_zero() {
                    continue;
                }
                // strict comparison keeps the first maximum
                let replace = match &best {
                    Some((_, max)) => *max < value,
                    None => true,
                };
                if replace {
                    best = Some((row, value));
                }
            }
            best.map(|(row, _)| row)
        }
        Pivoting::FirstNonZero => {
            candidates.into_iter().find(|&row| !matrix.at(row, column).is_zero())
        }
    }
}

/// Reduce `matrix` in place with the default configuration.
/// See [`eliminate_with`].
pub fn eliminate<T: Field, M: Matrix<T>>(matrix: &mut M) -> Result<(), SingularMatrix> {
    eliminate_with(matrix, &EliminationConfig::default())
}

/// Gauss-Jordan elimination of `matrix` in place.
///
/// On success the leading `rows x rows` block is the identity and the
/// remaining columns hold the augmented data with every row operation applied:
/// the solution of `A x = b` for `[A | b]`, the inverse for `[A | I]`.
///
/// On error the matrix is left partially reduced and must not be reused.
///
/// # Panics
///
/// Panics if the matrix has fewer columns than rows.
#[instrument(level = "debug", skip_all, fields(rows = matrix.rows(), cols = matrix.cols()))]
pub fn eliminate_with<T: Field, M: Matrix<T>>(
    matrix: &mut M,
    config: &EliminationConfig,
) -> Result<(), SingularMatrix> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    assert!(
        cols >= rows,
        "coefficient block is not square: {} rows, {} columns",
        rows,
        cols
    );

    for pivot in 0..rows {
        let Some(selected) = pivot_row(matrix, pivot, config.pivoting) else {
            debug!("no nonzero pivot in column {}", pivot);
            return Err(SingularMatrix { column: pivot });
        };

        if selected != pivot {
            debug!("pivot {}: swapping rows {} and {}", pivot, pivot, selected);
            matrix.swap_rows(pivot, selected);
        }

        let denom = matrix.at(pivot, pivot).clone();
        trace!("pivot {}: {}", pivot, denom);

        // Columns left of the pivot are already zero outside the diagonal
        for row in (0..rows).filter(|&row| row != pivot) {
            let numerator = matrix.at(row, pivot).clone();
            if numerator.is_zero() {
                continue;
            }

            for col in pivot + 1..cols {
                let delta = matrix.at(pivot, col).clone() * numerator.clone() / denom.clone();
                let cell = matrix.at_mut(row, col);
                *cell = cell.clone() - delta;
            }
            *matrix.at_mut(row, pivot) = T::zero();
        }

        for col in pivot + 1..cols {
            let cell = matrix.at_mut(pivot, col);
            *cell = cell.clone() / denom.clone();
        }
        *matrix.at_mut(pivot, pivot) = T::one();
    }

    Ok(())
}

/// Solve `a x = b` exactly.
pub fn solve<T: Field>(a: &MatrixGen<T>, b: &[T]) -> Result<Vec<T>, MatrixError> {
    check_square(a)?;
    let mut system = a.augment(&MatrixGen::from_column(b.to_vec())?)?;
    eliminate(&mut system)?;
    Ok(system.column(a.cols()))
}

pub fn inverse<T: Field>(a: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
    check_square(a)?;
    let mut system = a.augment(&MatrixGen::identity(a.rows()))?;
    eliminate(&mut system)?;
    Ok(system.augmented())
}

fn check_square<T: Field>(a: &MatrixGen<T>) -> Result<(), MatrixError> {
    if a.rows() != a.cols() {
        return Err(MatrixError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
