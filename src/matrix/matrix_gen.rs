use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::rings::field::Field;
use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;
use std::ops;
use std::ops::Range;
use std::str::FromStr;

/// Dense row-major matrix carrying its own shape.
///
/// `rows * cols == cells.len()` always holds. Parsed and listed matrices
/// are non-empty, but `new`, `identity(0)` and `columns` may produce a matrix
/// with zero rows or zero columns, e.g. `augmented()` of a square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Field> MatrixGen<T> {
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = match lines.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(MatrixError::Empty),
        };

        if let Some((row, line)) = lines.iter().find_position(|line| line.len() != cols) {
            return Err(MatrixError::Ragged {
                row,
                len: line.len(),
                expected: cols,
            });
        }

        Ok(MatrixGen {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    /// Like `from_list`, but also requires the leading block to be square,
    /// which is what the elimination engine expects.
    pub fn from_augmented(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let matrix = Self::from_list(lines)?;
        matrix.check_augmented()?;
        Ok(matrix)
    }

    pub fn from_column(values: Vec<T>) -> Result<Self, MatrixError> {
        if values.is_empty() {
            return Err(MatrixError::Empty);
        }

        Ok(MatrixGen {
            rows: values.len(),
            cols: 1,
            cells: values,
        })
    }

    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            rows,
            cols,
            cells: (0..(rows * cols)).map(|_| T::zero()).collect(),
        }
    }

    pub fn identity(n: usize) -> MatrixGen<T> {
        MatrixGen {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    pub fn check_augmented(&self) -> Result<(), MatrixError> {
        if self.cols < self.rows {
            return Err(MatrixError::NotAugmented {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.line(r).to_vec()).collect()
    }

    /// Copy of the columns in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` goes past the last column.
    pub fn columns(&self, range: Range<usize>) -> MatrixGen<T> {
        assert!(range.end <= self.cols, "column range out of bounds");
        MatrixGen {
            rows: self.rows,
            cols: range.len(),
            cells: (0..self.rows)
                .flat_map(|r| self.line(r)[range.clone()].iter().cloned())
                .collect(),
        }
    }

    pub fn column(&self, col: usize) -> Vec<T> {
        (0..self.rows).map(|row| self.at(row, col).clone()).collect()
    }

    /// Leading square block.
    pub fn coefficients(&self) -> MatrixGen<T> {
        self.columns(0..self.rows.min(self.cols))
    }

    /// Columns to the right of the leading square block.
    pub fn augmented(&self) -> MatrixGen<T> {
        self.columns(self.rows.min(self.cols)..self.cols)
    }

    /// Glue `rhs` to the right of `self`.
    pub fn augment(&self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        if self.rows != rhs.rows {
            return Err(self.mismatch(rhs));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols + rhs.cols,
            cells: (0..self.rows)
                .flat_map(|r| self.line(r).iter().chain(rhs.line(r).iter()).cloned())
                .collect(),
        })
    }

    pub fn transpose(&self) -> MatrixGen<T> {
        MatrixGen {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c).clone()))
                .collect(),
        }
    }

    /// True when the leading block is exactly the identity matrix.
    pub fn is_reduced(&self) -> bool {
        if self.cols < self.rows {
            return false;
        }

        (0..self.rows).all(|r| {
            (0..self.rows).all(|c| {
                let cell = self.at(r, c);
                if r == c {
                    cell.is_one()
                } else {
                    cell.is_zero()
                }
            })
        })
    }

    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MatrixError> {
        if self.cols != x.len() {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: x.len(),
                rhs_cols: 1,
            });
        }

        Ok((0..self.rows)
            .map(|r| dot(self.line(r).iter(), x.iter()))
            .collect())
    }

    // Empty slice for a matrix without columns
    fn line(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    fn mismatch(&self, rhs: &MatrixGen<T>) -> MatrixError {
        MatrixError::DimensionMismatch {
            lhs_rows: self.rows,
            lhs_cols: self.cols,
            rhs_rows: rhs.rows,
            rhs_cols: rhs.cols,
        }
    }
}

fn dot<'a, T: Field + 'a>(
    lhs: impl Iterator<Item = &'a T>,
    rhs: impl Iterator<Item = &'a T>,
) -> T {
    lhs.zip(rhs)
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

impl<T> Matrix<T> for MatrixGen<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.cols + col]
    }

    #[inline(always)]
    fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.cells[row * self.cols + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }
}

impl<T: Field> ops::Add<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, MatrixError>;

    fn add(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        if self.cols != rhs.cols || self.rows != rhs.rows {
            return Err(self.mismatch(rhs));
        }

        Ok(MatrixGen {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        })
    }
}

impl<T: Field + Send + Sync> ops::Mul<&MatrixGen<T>> for &MatrixGen<T> {
    type Output = Result<MatrixGen<T>, MatrixError>;

    fn mul(self, rhs: &MatrixGen<T>) -> Result<MatrixGen<T>, MatrixError> {
        if self.cols != rhs.rows {
            return Err(self.mismatch(rhs));
        }

        let mut result = MatrixGen::new(self.rows, rhs.cols);
        if rhs.cols == 0 {
            return Ok(result);
        }

        result
            .cells
            .par_chunks_mut(rhs.cols)
            .enumerate()
            .for_each(|(r, row)| {
                let line = self.line(r);
                for (c, cell) in row.iter_mut().enumerate() {
                    *cell = dot(line.iter(), (0..rhs.rows).map(|k| rhs.at(k, c)));
                }
            });

        Ok(result)
    }
}

impl<T: fmt::Display> fmt::Display for MatrixGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .chunks(self.cols.max(1))
            .map(|line| line.iter().join(" "))
            .join("\n");
        write!(f, "{}", text)
    }
}

// One row per line, entries separated by whitespace, `|` marks the
// augmented columns and is otherwise ignored.
impl<T> FromStr for MatrixGen<T>
where
    T: Field + FromStr,
    T::Err: fmt::Display,
{
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, MatrixError> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                let line = line.replace('|', " ");
                line.split_whitespace()
                    .enumerate()
                    .map(|(col, token)| {
                        token.parse::<T>().map_err(|error| MatrixError::Parse {
                            row,
                            col,
                            message: error.to_string(),
                        })
                    })
                    .collect::<Result<Vec<T>, MatrixError>>()
            })
            .collect::<Result<Vec<Vec<T>>, MatrixError>>()?;

        MatrixGen::from_list(lines)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
