//! Splitting tile origins across workers.

use std::panic;
use std::thread;

use log::debug;

use crate::blocked::TileOrigin;

/// How many workers the parallel strategy spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkerCount {
    /// Whatever the platform reports as available parallelism.
    #[default]
    Available,
    /// Exactly this many (0 is treated as 1).
    Fixed(usize),
}

impl WorkerCount {
    /// Resolves to a concrete worker count, always at least 1.
    pub fn resolve(self) -> usize {
        match self {
            WorkerCount::Available => thread::available_parallelism()
                .map(|t| t.get())
                .unwrap_or(1),
            WorkerCount::Fixed(n) => n.max(1),
        }
    }
}

/// Splits `tiles` into consecutive chunks, one per worker.
///
/// The chunk size is `ceil(len / workers)` (at least 1), so every tile lands
/// in exactly one chunk and the chunks together are the whole list in order.
/// Fewer than `workers` chunks come back when there are fewer tiles than
/// workers.
pub fn partition(tiles: &[TileOrigin], workers: usize) -> Vec<&[TileOrigin]> {
    let workers = workers.max(1);
    let per_worker = tiles.len().div_ceil(workers).max(1);
    let parts: Vec<_> = tiles.chunks(per_worker).collect();

    debug!(
        "{} tiles -> {} partitions of up to {} (workers={})",
        tiles.len(),
        parts.len(),
        per_worker,
        workers
    );
    parts
}

/// Runs `job` on every tile origin, one OS thread per partition.
///
/// Returns only after all workers have finished. A panicking worker is
/// re-raised on the calling thread once the others are joined.
pub fn run_partitions<F>(parts: &[&[TileOrigin]], job: &F)
where
    F: Fn(TileOrigin) + Sync,
{
    thread::scope(|s| {
        let handles: Vec<_> = parts
            .iter()
            .map(|&part| {
                s.spawn(move || {
                    for &origin in part {
                        job(origin);
                    }
                })
            })
            .collect();

        let mut failure = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                failure.get_or_insert(payload);
            }
        }
        if let Some(payload) = failure {
            panic::resume_unwind(payload);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked::tile_origins;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_partitions_concatenate_to_tile_list() {
        let tiles = tile_origins(10, 3).unwrap(); // 64 tiles
        for workers in [1, 2, 3, 5, 7, 63, 64, 65, 200] {
            let parts = partition(&tiles, workers);
            assert!(parts.len() <= workers);
            assert!(parts.iter().all(|p| !p.is_empty()));
            let joined: Vec<_> = parts.concat();
            assert_eq!(joined, tiles, "workers={}", workers);
        }
    }

    #[test]
    fn test_partition_sizes() {
        let tiles = tile_origins(4, 1).unwrap(); // 64 tiles
        let sizes: Vec<_> = partition(&tiles, 8).iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![8; 8]);

        let sizes: Vec<_> = partition(&tiles, 6).iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![11, 11, 11, 11, 11, 9]);
    }

    #[test]
    fn test_zero_workers_is_one_partition() {
        let tiles = tile_origins(6, 2).unwrap();
        let parts = partition(&tiles, 0);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], &tiles[..]);
    }

    #[test]
    fn test_no_tiles_no_partitions() {
        assert!(partition(&[], 4).is_empty());
    }

    #[test]
    fn test_every_tile_runs_once() {
        let n = 9;
        let edge = 2;
        let tiles = tile_origins(n, edge).unwrap();
        let per_axis = n.div_ceil(edge);

        for workers in 1..=tiles.len() + 3 {
            let counts: Vec<AtomicUsize> =
                (0..tiles.len()).map(|_| AtomicUsize::new(0)).collect();
            let parts = partition(&tiles, workers);
            run_partitions(&parts, &|o: TileOrigin| {
                let idx = ((o.i / edge) * per_axis + o.j / edge) * per_axis + o.k / edge;
                counts[idx].fetch_add(1, Ordering::Relaxed);
            });
            assert!(
                counts.iter().all(|c| c.load(Ordering::Relaxed) == 1),
                "workers={}",
                workers
            );
        }
    }

    #[test]
    #[should_panic(expected = "tile failed")]
    fn test_worker_panic_propagates() {
        let tiles = tile_origins(4, 2).unwrap();
        let parts = partition(&tiles, 4);
        run_partitions(&parts, &|o: TileOrigin| {
            if o == TileOrigin::new(2, 2, 2) {
                panic!("tile failed");
            }
        });
    }

    #[test]
    fn test_worker_count_resolve() {
        assert_eq!(WorkerCount::Fixed(0).resolve(), 1);
        assert_eq!(WorkerCount::Fixed(6).resolve(), 6);
        assert!(WorkerCount::Available.resolve() >= 1);
    }
}
