//! Cache-blocked multiplication.
//!
//! The N×N×N iteration cube is cut into cubes whose edge comes from a
//! [`BlockEdge`](crate::cache::BlockEdge) source. Each cube's working set
//! stays in cache while the naive kernel runs over it.
//!
//! Available implementations:
//! - `tiled`: one thread, i-j-k order inside each tile
//! - `cache_line`: one thread, i-k-j order inside each tile
//!
//! `tile` holds the tile enumeration and the per-cube kernel shared with
//! the threaded strategy.

pub mod cache_line;
pub mod tile;
pub mod tiled;

pub use tile::{TileOrigin, multiply_tile, tile_origins};
