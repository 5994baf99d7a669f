//! Picking a strategy at runtime.

use std::fmt;

use log::debug;

use crate::cache::FixedEdge;
use crate::config::Config;
use crate::element::Element;
use crate::error::Result;
use crate::matrix::Matrix;

/// The available multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Naive i-j-k triple loop. The reference result.
    Serial,
    /// i-j-k against a transposed copy of B.
    Transpose,
    /// Cache-blocked, one thread.
    Tiled,
    /// Cache-blocked with i-k-j order inside each tile.
    CacheLine,
    /// Cache-blocked across worker threads.
    Parallel,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Serial,
        Strategy::Transpose,
        Strategy::Tiled,
        Strategy::CacheLine,
        Strategy::Parallel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Serial => "Naive (i-j-k)",
            Strategy::Transpose => "Transposed B",
            Strategy::Tiled => "Tiled",
            Strategy::CacheLine => "Tiled (i-k-j)",
            Strategy::Parallel => "Tiled MT",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs any strategy with one [`Config`].
///
/// ```
/// use tiled_matmul::{Config, Matrix, Multiplier, Strategy, WorkerCount};
///
/// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
/// let b = Matrix::from_rows(&[[5, 6], [7, 8]]).unwrap();
/// let mut r = Matrix::zeros(2);
///
/// let config = Config::default().with_block_edge(1).with_workers(WorkerCount::Fixed(2));
/// Multiplier::new(config).multiply(Strategy::Parallel, &a, &b, &mut r).unwrap();
///
/// assert_eq!(r.as_slice(), &[19, 22, 43, 50]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplier {
    config: Config,
}

impl Multiplier {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `r += a * b` using `strategy`. `r` should start zeroed.
    pub fn multiply<T: Element>(
        &self,
        strategy: Strategy,
        a: &Matrix<T>,
        b: &Matrix<T>,
        r: &mut Matrix<T>,
    ) -> Result<()> {
        debug!("{} on {}x{}", strategy, a.dim(), a.dim());
        match strategy {
            Strategy::Serial => crate::serial_multiply(a, b, r),
            Strategy::Transpose => crate::transpose_multiply(a, b, r),
            Strategy::Tiled => crate::tiled_multiply(a, b, r, &self.edge::<T>()?),
            Strategy::CacheLine => crate::cache_line_multiply(a, b, r, &self.edge::<T>()?),
            Strategy::Parallel => {
                crate::parallel_multiply(a, b, r, &self.edge::<T>()?, self.config.workers)
            }
        }
    }

    fn edge<T>(&self) -> Result<FixedEdge> {
        self.config.block_edge.resolve::<T>().map(FixedEdge)
    }
}
