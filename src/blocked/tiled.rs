//! Single-threaded tiled GEMM.

use super::tile::{multiply_tile, tile_origins};
use crate::element::Element;
use crate::error::Result;

/// Cache-blocked matrix multiplication on one thread.
///
/// Walks the tile origins in i, j, k order and runs the per-cube kernel on
/// each. The arithmetic inside a tile keeps the i-j-k order of the naive
/// version; only the memory access pattern changes.
///
/// # Errors
///
/// Returns [`MatmulError::ZeroBlockEdge`](crate::MatmulError::ZeroBlockEdge)
/// before touching `r` if `edge` is 0.
pub fn multiply_tiled<T: Element>(
    a: &[T],
    b: &[T],
    r: &mut [T],
    n: usize,
    edge: usize,
) -> Result<()> {
    for origin in tile_origins(n, edge)? {
        multiply_tile(a, b, r, n, origin, edge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatmulError;
    use crate::matrix::naive_ijk::multiply_naive_ijk;

    fn check(n: usize, edge: usize) {
        let a: Vec<i64> = (0..n * n).map(|i| (i % 13) as i64 - 6).collect();
        let b: Vec<i64> = (0..n * n).map(|i| (i % 11) as i64).collect();

        let mut expected = vec![0; n * n];
        let mut actual = vec![0; n * n];
        multiply_naive_ijk(&a, &b, &mut expected, n);
        multiply_tiled(&a, &b, &mut actual, n, edge).unwrap();

        assert_eq!(expected, actual, "n={} edge={}", n, edge);
    }

    #[test]
    fn test_matches_naive() {
        for (n, edge) in [(1, 1), (2, 1), (3, 2), (8, 4), (10, 4), (17, 16), (5, 100)] {
            check(n, edge);
        }
    }

    #[test]
    fn test_zero_edge_leaves_result_untouched() {
        let a = [1, 2, 3, 4];
        let mut r = [7; 4];
        assert_eq!(
            multiply_tiled(&a, &a, &mut r, 2, 0),
            Err(MatmulError::ZeroBlockEdge)
        );
        assert_eq!(r, [7; 4]);
    }
}
