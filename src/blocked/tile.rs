//! Tile origins and the per-cube kernel.

use log::debug;

use crate::element::Element;
use crate::error::{MatmulError, Result};

/// Where one cube of work starts in the (i, j, k) iteration space.
///
/// Each offset is a multiple of the block edge. The cube extends `edge`
/// elements along every axis, clamped to N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileOrigin {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl TileOrigin {
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }
}

/// Lists every tile origin of the `[0, n)³` cube, i outer, j middle,
/// k inner.
///
/// The tiles cover the cube exactly once. Edge tiles are shorter when
/// `edge` doesn't divide `n`; nothing is padded.
///
/// # Errors
///
/// Returns [`MatmulError::ZeroBlockEdge`] if `edge` is 0.
pub fn tile_origins(n: usize, edge: usize) -> Result<Vec<TileOrigin>> {
    if edge == 0 {
        return Err(MatmulError::ZeroBlockEdge);
    }

    let per_axis = n.div_ceil(edge);
    let mut tiles = Vec::with_capacity(per_axis * per_axis * per_axis);
    for i in (0..n).step_by(edge) {
        for j in (0..n).step_by(edge) {
            for k in (0..n).step_by(edge) {
                tiles.push(TileOrigin::new(i, j, k));
            }
        }
    }

    debug!("{} tiles for n={} edge={}", tiles.len(), n, edge);
    Ok(tiles)
}

/// Visits every multiply-add of one tile in x, y, z order.
///
/// `f` receives the flat result index `x * n + y` and the product
/// `A[x][z] * B[z][y]`. Callers decide how to accumulate it.
#[inline(always)]
pub fn for_each_tile_product<T, F>(
    a: &[T],
    b: &[T],
    n: usize,
    origin: TileOrigin,
    edge: usize,
    mut f: F,
) where
    T: Element,
    F: FnMut(usize, T),
{
    let x_end = (origin.i + edge).min(n);
    let y_end = (origin.j + edge).min(n);
    let z_end = (origin.k + edge).min(n);

    for x in origin.i..x_end {
        for y in origin.j..y_end {
            for z in origin.k..z_end {
                f(x * n + y, a[x * n + z].mul_wrapping(b[z * n + y]));
            }
        }
    }
}

/// Per-cube kernel: `R[x][y] += A[x][z] * B[z][y]` over one tile.
///
/// `edge` must already be validated (non-zero); `origin` must come from
/// [`tile_origins`] with the same `n` and `edge`.
#[inline]
pub fn multiply_tile<T: Element>(
    a: &[T],
    b: &[T],
    r: &mut [T],
    n: usize,
    origin: TileOrigin,
    edge: usize,
) {
    for_each_tile_product(a, b, n, origin, edge, |idx, product| {
        r[idx] = r[idx].add_wrapping(product);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts how often each (x, y, z) triple is visited.
    fn coverage(n: usize, edge: usize) -> Vec<u32> {
        let mut hits = vec![0u32; n * n * n];
        for origin in tile_origins(n, edge).unwrap() {
            for x in origin.i..(origin.i + edge).min(n) {
                for y in origin.j..(origin.j + edge).min(n) {
                    for z in origin.k..(origin.k + edge).min(n) {
                        hits[(x * n + y) * n + z] += 1;
                    }
                }
            }
        }
        hits
    }

    #[test]
    fn test_order_is_i_j_k() {
        let tiles = tile_origins(4, 2).unwrap();
        assert_eq!(tiles.len(), 8);
        assert_eq!(tiles[0], TileOrigin::new(0, 0, 0));
        assert_eq!(tiles[1], TileOrigin::new(0, 0, 2));
        assert_eq!(tiles[2], TileOrigin::new(0, 2, 0));
        assert_eq!(tiles[4], TileOrigin::new(2, 0, 0));
        assert_eq!(tiles[7], TileOrigin::new(2, 2, 2));
    }

    #[test]
    fn test_zero_edge_rejected() {
        assert_eq!(tile_origins(8, 0), Err(MatmulError::ZeroBlockEdge));
    }

    #[test]
    fn test_edge_larger_than_n_is_single_tile() {
        assert_eq!(tile_origins(5, 5).unwrap(), vec![TileOrigin::new(0, 0, 0)]);
        assert_eq!(tile_origins(5, 64).unwrap(), vec![TileOrigin::new(0, 0, 0)]);
    }

    #[test]
    fn test_edge_one_is_every_cell() {
        assert_eq!(tile_origins(3, 1).unwrap().len(), 27);
    }

    #[test]
    fn test_uneven_edge_covers_cube_once() {
        // 10 = 4 + 4 + 2
        let tiles = tile_origins(10, 4).unwrap();
        assert_eq!(tiles.len(), 27);
        assert!(tiles.iter().all(|t| t.i % 4 == 0 && t.j % 4 == 0 && t.k % 4 == 0));
        assert!(coverage(10, 4).iter().all(|&h| h == 1));
    }

    #[test]
    fn test_empty_matrix_has_no_tiles() {
        assert!(tile_origins(0, 4).unwrap().is_empty());
    }

    #[test]
    fn test_edge_tile_is_clamped() {
        let n = 3;
        let a = vec![1i32; n * n];
        let b = vec![1i32; n * n];
        let mut r = vec![0i32; n * n];

        multiply_tile(&a, &b, &mut r, n, TileOrigin::new(2, 2, 2), 2);

        // Only cell (2, 2) with z = 2 lies inside the clamped tile.
        assert_eq!(r, vec![0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
