//! Dense integer matrix with modular inversion.
//!
//! Supports the arithmetic the Hill cipher needs: addition,
//! multiplication, scalar ops, elementwise residues, integer powers, and
//! the modular inverse via augmented-matrix Gauss-Jordan elimination.
//! Cells are stored row-major in a flat `Vec<i64>`.

use std::fmt;

use crate::error::ScytaleError;
use crate::modular::mmi;

/// Dense `rows x cols` integer matrix.
///
/// Rectangular by construction; compared by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Vec<i64>,
}

impl Matrix {
    /// Builds a matrix from a sequence of rows.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidArgument`] if `rows` is empty or
    /// the rows are not all the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use scytale::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![3, 3], vec![2, 5]]).unwrap();
    /// assert_eq!(m.get(1, 1), 5);
    /// ```
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, ScytaleError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ScytaleError::InvalidArgument(
                "matrix needs at least one row and one column".into(),
            ));
        }
        let cols = rows[0].len();
        let mut values = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(ScytaleError::InvalidArgument(
                    "matrix rows must all have the same length".into(),
                ));
            }
            values.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// Builds a null matrix of the given size.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidArgument`] if either dimension is 0.
    pub fn zeroes(rows: usize, cols: usize) -> Result<Self, ScytaleError> {
        if rows == 0 || cols == 0 {
            return Err(ScytaleError::InvalidArgument(
                "matrix dimensions must be positive".into(),
            ));
        }
        Ok(Matrix {
            rows,
            cols,
            values: vec![0; rows * cols],
        })
    }

    /// Builds the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, ScytaleError> {
        let mut m = Self::zeroes(n, n)?;
        for i in 0..n {
            m.set(i, i, 1);
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.rows && col < self.cols, "position out of range");
        self.values[row * self.cols + col]
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        assert!(row < self.rows && col < self.cols, "position out of range");
        self.values[row * self.cols + col] = value;
    }

    /// The `n`-th row as a slice.
    pub fn row(&self, n: usize) -> &[i64] {
        &self.values[n * self.cols..(n + 1) * self.cols]
    }

    /// The `n`-th column, collected.
    pub fn col(&self, n: usize) -> Vec<i64> {
        (0..self.rows).map(|r| self.get(r, n)).collect()
    }

    /// Matrix addition.
    ///
    /// # Errors
    /// Returns [`ScytaleError::DimensionMismatch`] unless both matrices
    /// have the same dimensions.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix, ScytaleError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(ScytaleError::DimensionMismatch(format!(
                "cannot add {}x{} to {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            values,
        })
    }

    /// Adds a scalar to every cell.
    pub fn add_scalar(&self, k: i64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|v| v + k).collect(),
        }
    }

    /// Matrix multiplication.
    ///
    /// # Errors
    /// Returns [`ScytaleError::DimensionMismatch`] unless `self.cols ==
    /// other.rows`.
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix, ScytaleError> {
        if self.cols != other.rows {
            return Err(ScytaleError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut result = Matrix::zeroes(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0i64;
                for k in 0..self.cols {
                    acc += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, acc);
            }
        }
        Ok(result)
    }

    /// Multiplies every cell by a scalar.
    pub fn mul_scalar(&self, k: i64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|v| v * k).collect(),
        }
    }

    /// Elementwise residue modulo `n`, mapped into `0..n`.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidArgument`] unless `n > 0`.
    pub fn modulo(&self, n: i64) -> Result<Matrix, ScytaleError> {
        if n <= 0 {
            return Err(ScytaleError::InvalidArgument(
                "modulus must be positive".into(),
            ));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            values: self.values.iter().map(|v| v.rem_euclid(n)).collect(),
        })
    }

    /// Raises the matrix to an integer power.
    ///
    /// Positive powers are computed by repeated multiplication, reduced
    /// modulo `modulus` afterwards when one is given. The power `-1`
    /// computes the modular inverse and requires a modulus.
    ///
    /// # Errors
    /// - [`ScytaleError::UnsupportedOperation`] for power `-1` without a
    ///   modulus.
    /// - [`ScytaleError::NotInvertible`] if the matrix is not square, or
    ///   is singular modulo `modulus`.
    /// - [`ScytaleError::InvalidArgument`] for any other non-positive
    ///   power.
    ///
    /// # Examples
    ///
    /// ```
    /// use scytale::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![3, 3], vec![2, 5]]).unwrap();
    /// let inv = m.pow(-1, Some(26)).unwrap();
    /// assert_eq!(inv, Matrix::from_rows(&[vec![15, 17], vec![20, 9]]).unwrap());
    /// ```
    pub fn pow(&self, power: i32, modulus: Option<i64>) -> Result<Matrix, ScytaleError> {
        if power > 0 {
            let mut m = self.clone();
            for _ in 0..power - 1 {
                m = m.try_mul(self)?;
            }
            if let Some(n) = modulus {
                m = m.modulo(n)?;
            }
            return Ok(m);
        }

        if power != -1 {
            return Err(ScytaleError::InvalidArgument(format!(
                "cannot raise a matrix to the power {}",
                power
            )));
        }
        let modulus = modulus.ok_or_else(|| {
            ScytaleError::UnsupportedOperation("matrix inversion requires a modulus".into())
        })?;
        if self.rows != self.cols {
            return Err(ScytaleError::NotInvertible(
                "only square matrices are invertible".into(),
            ));
        }
        self.inverse_mod(modulus)
    }

    /// Modular inverse via Gauss-Jordan on the augmented matrix `[self | I]`.
    ///
    /// Pivots are taken on the diagonal without row swapping; a pivot
    /// with no inverse modulo `modulus` means the matrix is treated as
    /// singular.
    fn inverse_mod(&self, modulus: i64) -> Result<Matrix, ScytaleError> {
        if modulus <= 0 {
            return Err(ScytaleError::InvalidArgument(
                "modulus must be positive".into(),
            ));
        }
        let n = self.rows;
        let width = 2 * n;

        // Augment with the identity, reducing cells as we go.
        let mut v = vec![0i64; n * width];
        for i in 0..n {
            for j in 0..n {
                v[i * width + j] = self.get(i, j).rem_euclid(modulus);
            }
            v[i * width + n + i] = 1 % modulus;
        }

        for i in 0..n {
            // Normalise the pivot row.
            let multiplier = mmi(v[i * width + i], modulus).map_err(|_| {
                ScytaleError::NotInvertible(format!(
                    "matrix is not invertible modulo {}",
                    modulus
                ))
            })?;
            for j in 0..width {
                v[i * width + j] = (v[i * width + j] * multiplier).rem_euclid(modulus);
            }

            // Sweep the pivot column out of every other row.
            for r in 0..n {
                if r == i {
                    continue;
                }
                let factor = v[r * width + i];
                for k in 0..width {
                    v[r * width + k] =
                        (v[r * width + k] - factor * v[i * width + k]).rem_euclid(modulus);
                }
            }
        }

        let mut result = Matrix::zeroes(n, n)?;
        for i in 0..n {
            for j in 0..n {
                result.set(i, j, v[i * width + n + j]);
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Matrix {
    /// Renders cells right-aligned to the widest value's width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .values
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.get(r, c), width = width)?;
            }
        }
        Ok(())
    }
}
