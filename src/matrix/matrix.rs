/// Row-major storage the elimination engine can reduce in place.
///
/// The container carries its own shape: `rows` coefficient rows and `cols`
/// columns, the first `rows` of which form the square coefficient block.
pub trait Matrix<T> {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn at(&self, row: usize, col: usize) -> &T;
    fn at_mut(&mut self, row: usize, col: usize) -> &mut T;
    fn swap_rows(&mut self, a: usize, b: usize);

    fn augments(&self) -> usize {
        self.cols().saturating_sub(self.rows())
    }
}

impl<T, const R: usize, const C: usize> Matrix<T> for [[T; C]; R] {
    fn rows(&self) -> usize {
        R
    }

    fn cols(&self) -> usize {
        C
    }

    fn at(&self, row: usize, col: usize) -> &T {
        &self[row][col]
    }

    fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[row][col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

// Rows are assumed to share the length of the first one
impl<T> Matrix<T> for Vec<Vec<T>> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn cols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn at(&self, row: usize, col: usize) -> &T {
        &self[row][col]
    }

    fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[row][col]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_array_shape() {
        let mut m = [[1, 2, 3], [4, 5, 6]];
        assert_eq!(Matrix::rows(&m), 2);
        assert_eq!(Matrix::cols(&m), 3);
        assert_eq!(Matrix::augments(&m), 1);

        Matrix::swap_rows(&mut m, 0, 1);
        assert_eq!(m, [[4, 5, 6], [1, 2, 3]]);

        *Matrix::at_mut(&mut m, 1, 2) = 9;
        assert_eq!(*Matrix::at(&m, 1, 2), 9);
    }

    #[test]
    fn test_matrix_nested_vec_shape() {
        let mut m = vec![vec![1, 0], vec![0, 1]];
        assert_eq!(Matrix::rows(&m), 2);
        assert_eq!(Matrix::cols(&m), 2);
        assert_eq!(Matrix::augments(&m), 0);

        Matrix::swap_rows(&mut m, 0, 1);
        assert_eq!(m, vec![vec![0, 1], vec![1, 0]]);

        let empty: Vec<Vec<i32>> = vec![];
        assert_eq!(Matrix::cols(&empty), 0);
    }
}
