//! Multi-threaded tiled GEMM.
//!
//! Two phases per call: the tile list is cut into contiguous partitions on
//! the calling thread, then one scoped worker per partition runs the
//! per-cube kernel. Workers accumulate into atomic cells, because tiles
//! that differ only in their k offset hit the same result cells and may
//! land on different workers.
//!
//! - `partition`: worker count and the block partition of the tile list
//! - `parallel`: the execution phase and the atomic result buffer

pub mod parallel;
pub mod partition;

pub use parallel::multiply_parallel;
pub use partition::{WorkerCount, partition, run_partitions};
