//! Tiled GEMM with i-k-j order inside each tile.

use super::tile::{TileOrigin, tile_origins};
use crate::element::Element;
use crate::error::Result;

/// Cache-blocked multiplication with the j and k loops swapped per tile.
///
/// Same tiling as [`multiply_tiled`](super::tiled::multiply_tiled), but the
/// innermost loop now runs along a row of B and a row of R (stride 1), with
/// `A[x][z]` held in a register.
pub fn multiply_cache_line<T: Element>(
    a: &[T],
    b: &[T],
    r: &mut [T],
    n: usize,
    edge: usize,
) -> Result<()> {
    for origin in tile_origins(n, edge)? {
        tile_ikj(a, b, r, n, origin, edge);
    }
    Ok(())
}

#[inline]
fn tile_ikj<T: Element>(
    a: &[T],
    b: &[T],
    r: &mut [T],
    n: usize,
    origin: TileOrigin,
    edge: usize,
) {
    let x_end = (origin.i + edge).min(n);
    let y_end = (origin.j + edge).min(n);
    let z_end = (origin.k + edge).min(n);

    for x in origin.i..x_end {
        let r_row = &mut r[x * n + origin.j..x * n + y_end];
        for z in origin.k..z_end {
            let a_xz = a[x * n + z];
            let b_row = &b[z * n + origin.j..z * n + y_end];
            for (rv, &bv) in r_row.iter_mut().zip(b_row) {
                *rv = rv.mul_add_wrapping(a_xz, bv);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::naive_ijk::multiply_naive_ijk;

    #[test]
    fn test_matches_naive() {
        for (n, edge) in [(1, 1), (3, 2), (10, 4), (16, 16), (33, 8)] {
            let a: Vec<i32> = (0..n * n).map(|i| (i % 9) as i32 - 3).collect();
            let b: Vec<i32> = (0..n * n).map(|i| (i % 5) as i32 + 1).collect();

            let mut expected = vec![0; n * n];
            let mut actual = vec![0; n * n];
            multiply_naive_ijk(&a, &b, &mut expected, n);
            multiply_cache_line(&a, &b, &mut actual, n, edge).unwrap();

            assert_eq!(expected, actual, "n={} edge={}", n, edge);
        }
    }
}
