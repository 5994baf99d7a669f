//! Block-edge sources.
//!
//! The tiled strategies only need one number: how many elements form one edge
//! of a tile. Where it comes from is injected through [`BlockEdge`], so tests
//! can pin it to 1 or to something larger than the matrix.

use std::mem;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::error::{MatmulError, Result};

/// Cache line size assumed when the platform can't be queried.
pub const DEFAULT_CACHE_LINE_BYTES: usize = 64;

#[cfg(target_os = "linux")]
const CACHE_LINE_SYSFS: &str = "/sys/devices/system/cpu/cpu0/cache/index0/coherency_line_size";

/// Supplies the tile edge, in matrix elements.
pub trait BlockEdge {
    fn block_edge(&self) -> usize;
}

/// A fixed block edge, from configuration or a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedEdge(pub usize);

impl BlockEdge for FixedEdge {
    fn block_edge(&self) -> usize {
        self.0
    }
}

/// Block edge derived from the host's L1 cache line.
///
/// The line size is reported in bytes and converted to a count of elements,
/// so an `i32` tile row spans exactly one cache line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLine {
    element_bytes: usize,
}

impl CacheLine {
    pub fn for_element<T>() -> Self {
        Self {
            element_bytes: mem::size_of::<T>().max(1),
        }
    }
}

impl BlockEdge for CacheLine {
    fn block_edge(&self) -> usize {
        (cache_line_bytes() / self.element_bytes).max(1)
    }
}

/// L1 data cache line size in bytes, queried once per process.
pub fn cache_line_bytes() -> usize {
    static LINE: OnceLock<usize> = OnceLock::new();
    *LINE.get_or_init(|| match query_cache_line() {
        Some(bytes) => {
            debug!("cache line size: {} bytes", bytes);
            bytes
        }
        None => {
            warn!(
                "cache line size unavailable, assuming {} bytes",
                DEFAULT_CACHE_LINE_BYTES
            );
            DEFAULT_CACHE_LINE_BYTES
        }
    })
}

#[cfg(target_os = "linux")]
fn query_cache_line() -> Option<usize> {
    std::fs::read_to_string(CACHE_LINE_SYSFS)
        .ok()?
        .trim()
        .parse()
        .ok()
        .filter(|&bytes| bytes > 0)
}

#[cfg(not(target_os = "linux"))]
fn query_cache_line() -> Option<usize> {
    None
}

/// Reads the block edge from `source`, rejecting 0.
pub fn checked_block_edge(source: &dyn BlockEdge) -> Result<usize> {
    match source.block_edge() {
        0 => Err(MatmulError::ZeroBlockEdge),
        edge => Ok(edge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_edge() {
        assert_eq!(checked_block_edge(&FixedEdge(4)), Ok(4));
        assert_eq!(
            checked_block_edge(&FixedEdge(0)),
            Err(MatmulError::ZeroBlockEdge)
        );
    }

    #[test]
    fn test_cache_line_counts_elements() {
        let bytes = cache_line_bytes();
        assert!(bytes > 0);
        assert_eq!(
            CacheLine::for_element::<i32>().block_edge(),
            (bytes / 4).max(1)
        );
        assert_eq!(
            CacheLine::for_element::<i64>().block_edge(),
            (bytes / 8).max(1)
        );
    }

    #[test]
    fn test_cache_line_never_zero() {
        // Wider than any real cache line.
        let huge = CacheLine {
            element_bytes: 1 << 20,
        };
        assert_eq!(huge.block_edge(), 1);
    }
}
