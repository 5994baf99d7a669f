//! Runtime configuration: block edge source and worker count.

use std::env;

use crate::cache::{CacheLine, FixedEdge, checked_block_edge};
use crate::error::{MatmulError, Result, invalid_config};
use crate::threaded::WorkerCount;

/// Environment variable overriding the block edge (in elements).
pub const BLOCK_EDGE_VAR: &str = "MATMUL_BLOCK_EDGE";
/// Environment variable fixing the worker count. `0` means "available".
pub const THREADS_VAR: &str = "MATMUL_THREADS";

/// Where the tiled strategies get their block edge from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockEdgeSource {
    /// One cache line's worth of elements.
    #[default]
    CacheLine,
    Fixed(usize),
}

impl BlockEdgeSource {
    /// Validated block edge for element type `T`.
    pub fn resolve<T>(self) -> Result<usize> {
        match self {
            BlockEdgeSource::CacheLine => checked_block_edge(&CacheLine::for_element::<T>()),
            BlockEdgeSource::Fixed(edge) => checked_block_edge(&FixedEdge(edge)),
        }
    }
}

/// Settings shared by the tiled and parallel strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub block_edge: BlockEdgeSource,
    pub workers: WorkerCount,
}

impl Config {
    pub fn with_block_edge(mut self, edge: usize) -> Self {
        self.block_edge = BlockEdgeSource::Fixed(edge);
        self
    }

    pub fn with_workers(mut self, workers: WorkerCount) -> Self {
        self.workers = workers;
        self
    }

    /// Defaults overridden by `MATMUL_BLOCK_EDGE` and `MATMUL_THREADS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BLOCK_EDGE_VAR) {
            match parse_count(BLOCK_EDGE_VAR, &raw)? {
                0 => return Err(MatmulError::ZeroBlockEdge),
                edge => config.block_edge = BlockEdgeSource::Fixed(edge),
            }
        }

        if let Some(raw) = lookup(THREADS_VAR) {
            config.workers = match parse_count(THREADS_VAR, &raw)? {
                0 => WorkerCount::Available,
                n => WorkerCount::Fixed(n),
            };
        }

        Ok(config)
    }
}

fn parse_count(key: &str, raw: &str) -> Result<usize> {
    raw.trim().parse().map_err(|_| invalid_config(key, raw))
}
