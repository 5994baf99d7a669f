//! Square integer matrix multiplication, from the textbook loop to tiled
//! multi-threaded.
//!
//! Every strategy computes `R += A * B` for N×N matrices of fixed-width
//! signed integers and gives the exact same answer as the naive loop. They
//! differ only in how they walk memory: transposing B, cutting the iteration
//! cube into cache-sized tiles, or spreading those tiles across threads.
//!
//! ## Usage
//!
//! ```
//! use tiled_matmul::{Matrix, serial_multiply};
//!
//! let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
//! let b = Matrix::from_rows(&[[10, 11, 12], [13, 14, 15], [16, 17, 18]]).unwrap();
//! let mut r = Matrix::zeros(3);
//!
//! serial_multiply(&a, &b, &mut r).unwrap();
//! assert_eq!(r.row(0), &[84, 90, 96]);
//! ```
//!
//! The tiled versions take their tile edge from a [`BlockEdge`] source:
//!
//! ```
//! use tiled_matmul::{CacheLine, Matrix, WorkerCount, parallel_multiply};
//!
//! let a = Matrix::from_fn(256, |i, j| ((i + j) % 100) as i32);
//! let b = Matrix::from_fn(256, |i, j| ((i * j) % 100) as i32);
//! let mut r = Matrix::zeros(256);
//!
//! let edge = CacheLine::for_element::<i32>();
//! parallel_multiply(&a, &b, &mut r, &edge, WorkerCount::Fixed(4)).unwrap();
//! ```
//!
//! ## What's inside
//!
//! - Naive i-j-k reference and a transposed-B variant
//! - Cache-blocked multiply with a per-tile kernel
//! - Tile partitioning across scoped threads with atomic accumulation

pub mod blocked;
pub mod cache;
pub mod config;
pub mod element;
pub mod error;
pub mod matrix;
pub mod strategy;
pub mod threaded;

pub use cache::{BlockEdge, CacheLine, FixedEdge};
pub use config::{BlockEdgeSource, Config};
pub use element::Element;
pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use strategy::{Multiplier, Strategy};
pub use threaded::WorkerCount;

use cache::checked_block_edge;
use matrix::ensure_square_operands;

/// Matrix multiply with the naive i-j-k loop: R += A * B
///
/// The reference every other strategy is checked against.
///
/// # Errors
///
/// Fails if A, B and R don't share one dimension.
pub fn serial_multiply<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    r: &mut Matrix<T>,
) -> Result<()> {
    let n = ensure_square_operands(a, b, r)?;
    matrix::naive_ijk::multiply_naive_ijk(a.as_slice(), b.as_slice(), r.as_mut_slice(), n);
    Ok(())
}

/// Same as [`serial_multiply`] but transposes B into scratch space first,
/// so the inner loop reads both operands along rows.
pub fn transpose_multiply<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    r: &mut Matrix<T>,
) -> Result<()> {
    let n = ensure_square_operands(a, b, r)?;
    matrix::transpose::multiply_transposed(a.as_slice(), b.as_slice(), r.as_mut_slice(), n);
    Ok(())
}

/// Cache-blocked multiply on the calling thread.
///
/// # Errors
///
/// Fails on a dimension mismatch, or if `edge` reports 0.
pub fn tiled_multiply<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    r: &mut Matrix<T>,
    edge: &dyn BlockEdge,
) -> Result<()> {
    let n = ensure_square_operands(a, b, r)?;
    let edge = checked_block_edge(edge)?;
    blocked::tiled::multiply_tiled(a.as_slice(), b.as_slice(), r.as_mut_slice(), n, edge)
}

/// Cache-blocked multiply with i-k-j order inside each tile.
pub fn cache_line_multiply<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    r: &mut Matrix<T>,
    edge: &dyn BlockEdge,
) -> Result<()> {
    let n = ensure_square_operands(a, b, r)?;
    let edge = checked_block_edge(edge)?;
    let (a, b, r) = (a.as_slice(), b.as_slice(), r.as_mut_slice());
    blocked::cache_line::multiply_cache_line(a, b, r, n, edge)
}

/// Same as [`tiled_multiply`] but spreads the tiles over `workers` threads.
///
/// Blocks until every worker has finished. A panic in any worker is
/// re-raised here.
pub fn parallel_multiply<T: Element>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    r: &mut Matrix<T>,
    edge: &dyn BlockEdge,
    workers: WorkerCount,
) -> Result<()> {
    let n = ensure_square_operands(a, b, r)?;
    let edge = checked_block_edge(edge)?;
    threaded::multiply_parallel(
        a.as_slice(),
        b.as_slice(),
        r.as_mut_slice(),
        n,
        edge,
        workers,
    )
}
