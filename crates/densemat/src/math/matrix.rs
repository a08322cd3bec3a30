use std::ops::{Add, Mul, Sub};

use crate::error::{MatrixError, MatrixOp};

/// Dense, row-major matrix of `f64` values with a fixed shape.
///
/// Element access is permissive: [`Matrix::set`] ignores out-of-bounds writes
/// and [`Matrix::get`] returns `0.0` for out-of-bounds reads. Use
/// [`Matrix::try_get`] / [`Matrix::try_set`] when a bad index must be seen.
///
/// ```
/// use densemat::Matrix;
///
/// let mut m = Matrix::new(2, 2).unwrap();
/// m.set(0, 1, 3.5);
/// assert_eq!(m.get(0, 1), 3.5);
/// assert_eq!(m.get(5, 5), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Number of elements in a `rows x cols` buffer.
    ///
    /// Zero dimensions and element counts that cannot be addressed as a
    /// `Vec<f64>` are rejected.
    fn element_count(rows: usize, cols: usize) -> Result<usize, MatrixError> {
        let max_len = isize::MAX as usize / std::mem::size_of::<f64>();
        match rows.checked_mul(cols) {
            Some(len) if rows > 0 && cols > 0 && len <= max_len => Ok(len),
            _ => {
                log::debug!("rejecting matrix with dimensions {}x{}", rows, cols);
                Err(MatrixError::InvalidDimension { rows, cols })
            }
        }
    }

    /// Zero-filled `rows x cols` matrix. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = Self::element_count(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if data.len() != Self::element_count(rows, cols)? {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a matrix from a slice of rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(MatrixError::RaggedRows {
                row,
                len: r.len(),
                expected: n_cols,
            });
        }
        let mut m = Self::new(n_rows, n_cols)?;
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                m.set(i, j, value);
            }
        }
        Ok(m)
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.set(i, i, 1.0);
        }
        Ok(m)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Panics if `row` is out of bounds.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Overwrites one element. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if self.in_bounds(row, col) {
            let offset = self.offset(row, col);
            self.data[offset] = value;
        }
    }

    /// Reads one element, or `0.0` when the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.try_get(row, col).unwrap_or(0.0)
    }

    pub fn try_get(&self, row: usize, col: usize) -> Option<f64> {
        if self.in_bounds(row, col) {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn try_set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        self.set(row, col, value);
        Ok(())
    }

    fn check_same_shape(&self, other: &Matrix, op: MatrixOp) -> Result<(), MatrixError> {
        if self.shape() != other.shape() {
            log::debug!(
                "{} rejected: {:?} vs {:?}",
                op,
                self.shape(),
                other.shape()
            );
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Matrix, mut f: F) -> Matrix
    where
        F: FnMut(f64, f64) -> f64,
    {
        Matrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Elementwise sum. Shapes must be identical.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        log::trace!("add {:?} + {:?}", self.shape(), other.shape());
        self.check_same_shape(other, MatrixOp::Add)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference `self - other`. Shapes must be identical.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        log::trace!("sub {:?} - {:?}", self.shape(), other.shape());
        self.check_same_shape(other, MatrixOp::Subtract)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Matrix product `self x other`, requiring `self.ncols() == other.nrows()`.
    ///
    /// Each output element is a sequential running sum over the shared
    /// dimension.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        log::trace!("matmul {:?} x {:?}", self.shape(), other.shape());
        if self.cols != other.rows {
            log::debug!(
                "multiplication rejected: inner dimensions {} and {}",
                self.cols,
                other.rows
            );
            return Err(MatrixError::DimensionMismatch {
                op: MatrixOp::Multiply,
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut result = Matrix::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[self.offset(i, k)] * other.data[other.offset(k, j)];
                }
                let offset = result.offset(i, j);
                result.data[offset] = sum;
            }
        }

        Ok(result)
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[self.offset(i, j)];
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// True when shapes match and every element differs by at most `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl<'a> Add<&'a Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &'a Matrix) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<'a> Sub<&'a Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, rhs: &'a Matrix) -> Self::Output {
        Matrix::sub(self, rhs)
    }
}

impl<'a> Mul<&'a Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &'a Matrix) -> Self::Output {
        self.matmul(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_a() -> Matrix {
        Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn new_is_zero_filled() {
        let m = Matrix::new(3, 4).unwrap();
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.as_slice().len(), 12);
        assert!(m.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Matrix::new(0, 3),
            Err(MatrixError::InvalidDimension { rows: 0, cols: 3 })
        );
        assert!(Matrix::new(2, 0).is_err());
        assert!(Matrix::identity(0).is_err());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(
            Matrix::new(huge, huge),
            Err(MatrixError::InvalidDimension {
                rows: huge,
                cols: huge
            })
        );
        assert_eq!(
            Matrix::from_shape_vec((huge, huge), vec![]),
            Err(MatrixError::InvalidDimension {
                rows: huge,
                cols: huge
            })
        );
        assert!(Matrix::new(usize::MAX, 2).is_err());
        assert!(Matrix::new(usize::MAX / 8 + 1, 1).is_err());
    }

    #[test]
    fn from_shape_vec_checks_length() {
        let err = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                rows: 2,
                cols: 3,
                len: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 2,
                len: 1,
                expected: 2
            }
        );
        assert_eq!(err.to_string(), "row 2 has 1 elements, expected 2");
        assert!(matches!(
            Matrix::from_rows(&[]),
            Err(MatrixError::InvalidDimension { rows: 0, cols: 0 })
        ));
    }

    #[test]
    fn row_major_layout() {
        let a = sample_a();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(a.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn out_of_bounds_set_is_ignored() {
        let mut a = sample_a();
        let before = a.clone();
        a.set(2, 0, 9.0);
        a.set(0, 3, 9.0);
        a.set(usize::MAX, usize::MAX, 9.0);
        assert_eq!(a, before);
    }

    #[test]
    fn out_of_bounds_get_returns_zero() {
        let a = sample_a();
        assert_eq!(a.get(2, 0), 0.0);
        assert_eq!(a.get(0, 3), 0.0);
        assert_eq!(a.try_get(0, 3), None);
        assert_eq!(a.try_get(1, 2), Some(6.0));
    }

    #[test]
    fn try_set_reports_bad_index() {
        let mut a = sample_a();
        assert_eq!(
            a.try_set(5, 0, 1.0),
            Err(MatrixError::IndexOutOfBounds {
                row: 5,
                col: 0,
                shape: (2, 3)
            })
        );
        a.try_set(1, 1, -1.0).unwrap();
        assert_eq!(a.get(1, 1), -1.0);
    }

    #[test]
    fn non_finite_values_can_be_stored() {
        let mut m = Matrix::new(1, 2).unwrap();
        m.set(0, 0, f64::INFINITY);
        m.set(0, 1, f64::NAN);
        assert_eq!(m.get(0, 0), f64::INFINITY);
        assert!(m.get(0, 1).is_nan());
    }

    #[test]
    fn identity_diagonal() {
        let id = Matrix::identity(3).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn add_and_sub_elementwise() {
        let a = sample_a();
        let b = Matrix::from_rows(&[vec![6.0, 5.0, 4.0], vec![3.0, 2.0, 1.0]]).unwrap();
        let sum = a.add(&b).unwrap();
        assert!(sum.as_slice().iter().all(|&v| v == 7.0));
        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.as_slice(), &[-5.0, -3.0, -1.0, 1.0, 3.0, 5.0]);
    }

    #[test]
    fn add_shape_mismatch() {
        let a = sample_a();
        let b = Matrix::new(3, 2).unwrap();
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                op: MatrixOp::Add,
                left: (2, 3),
                right: (3, 2)
            })
        );
        assert!(matches!(
            a.sub(&b),
            Err(MatrixError::DimensionMismatch {
                op: MatrixOp::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn matmul_inner_dimension_mismatch() {
        let a = sample_a();
        let b = Matrix::new(2, 2).unwrap();
        assert_eq!(
            a.matmul(&b),
            Err(MatrixError::DimensionMismatch {
                op: MatrixOp::Multiply,
                left: (2, 3),
                right: (2, 2)
            })
        );
    }

    #[test]
    fn matmul_known_product() {
        let a = sample_a();
        let b = Matrix::from_rows(&[vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn transpose_swaps_indices() {
        let t = sample_a().transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn operators_delegate() {
        let a = sample_a();
        let doubled = (&a + &a).unwrap();
        assert_eq!(doubled.get(1, 2), 12.0);
        let zero = (&a - &a).unwrap();
        assert!(zero.as_slice().iter().all(|&v| v == 0.0));
        assert!((&a * &a).is_err());
        let gram = (&a * &a.transpose()).unwrap();
        assert_eq!(gram.as_slice(), &[14.0, 32.0, 32.0, 77.0]);
    }

    #[test]
    fn approx_eq_respects_shape_and_tolerance() {
        let a = sample_a();
        let mut b = a.clone();
        b.set(0, 0, 1.0 + 1e-12);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 0.0));
        assert!(!a.approx_eq(&a.transpose(), 1.0));
    }
}
