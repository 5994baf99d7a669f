//! Dense square matrices and the naive implementations.
//!
//! These provide the correctness baseline and the transposed variant that
//! the blocked and threaded strategies are compared against.

pub mod naive_ijk;
pub mod transpose;

use std::ops::{Index, IndexMut};

use rand::Rng;
use rand::distr::uniform::{SampleRange, SampleUniform};

use crate::element::Element;
use crate::error::{Result, dimension_mismatch, invalid_shape};

/// Row-major N×N matrix that owns its storage.
///
/// Element `(i, j)` lives at `data[i * n + j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Zero-filled N×N matrix, ready to be used as a result.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![T::default(); n * n],
        }
    }

    /// Wraps row-major data. Fails unless `data.len() == n * n`.
    pub fn from_vec(n: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != n * n {
            return Err(invalid_shape(n * n, data.len()));
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from nested rows. Every row must have as many
    /// elements as there are rows.
    ///
    /// ```
    /// use tiled_matmul::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(invalid_shape(n, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Fills an N×N matrix with values drawn uniformly from `range`.
    pub fn random<G, S>(n: usize, range: S, rng: &mut G) -> Self
    where
        G: Rng + ?Sized,
        T: SampleUniform,
        S: SampleRange<T> + Clone,
    {
        let data = (0..n * n)
            .map(|_| rng.random_range(range.clone()))
            .collect();
        Self { n, data }
    }

    /// Side length N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.n + j] = value;
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Resets every element to zero so the matrix can be reused as a result.
    pub fn fill_zero(&mut self) {
        self.data.fill(T::default());
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.n + j]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.n + j]
    }
}

/// Checks that A, B and R share one dimension and returns it.
pub fn ensure_square_operands<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    r: &Matrix<T>,
) -> Result<usize> {
    let n = a.dim();
    if b.dim() != n || r.dim() != n {
        return Err(dimension_mismatch(n, b.dim(), r.dim()));
    }
    Ok(n)
}
