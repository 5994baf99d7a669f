//! Multi-threaded tiled GEMM with atomic accumulation.

use log::debug;

use super::partition::{WorkerCount, partition, run_partitions};
use crate::blocked::tile::{TileOrigin, for_each_tile_product, tile_origins};
use crate::element::{AtomicElement, Element};
use crate::error::Result;

/// Multi-threaded cache-blocked matrix multiplication.
///
/// Builds the same tile list as [`multiply_tiled`](crate::blocked::tiled::multiply_tiled),
/// splits it into contiguous partitions, and runs each partition on its own
/// thread. R is loaded into atomic cells first; every product is added with
/// a fetch-and-add, and the cells are written back once all workers have
/// joined. A and B are shared read-only.
///
/// # Arguments
///
/// * `workers` - Worker count; the actual number of threads can be lower
///   when there are fewer tiles than workers
///
/// # Errors
///
/// Returns [`MatmulError::ZeroBlockEdge`](crate::MatmulError::ZeroBlockEdge)
/// if `edge` is 0. `r` is left untouched in that case.
pub fn multiply_parallel<T: Element>(
    a: &[T],
    b: &[T],
    r: &mut [T],
    n: usize,
    edge: usize,
    workers: WorkerCount,
) -> Result<()> {
    let tiles = tile_origins(n, edge)?;
    let threads = workers.resolve();
    let parts = partition(&tiles, threads);
    debug!(
        "parallel multiply: n={} edge={} threads={}",
        n,
        edge,
        parts.len()
    );

    let cells: Vec<T::Atomic> = r.iter().map(|&v| T::Atomic::new(v)).collect();

    run_partitions(&parts, &|origin: TileOrigin| {
        for_each_tile_product(a, b, n, origin, edge, |idx, product| {
            cells[idx].fetch_add(product);
        });
    });

    for (dst, cell) in r.iter_mut().zip(cells) {
        *dst = cell.into_inner();
    }
    Ok(())
}
