//! Monte Carlo simulation of Buffon's needle.
//!
//! Unit-length needles are dropped on a plane ruled with horizontal lines one
//! unit apart. The fraction that crosses a line approaches 2/π, which gives an
//! estimate of π.
//!
//! Every operation takes the random generator explicitly:
//!
//! ```rust
//! use buffon::{buffon_experiment, seeded_rng};
//!
//! let mut rng = seeded_rng(42);
//! let experiment = buffon_experiment(&mut rng, 1_000, 10).unwrap();
//! assert_eq!(experiment.cross.len(), 1_000);
//! ```

pub mod error;
pub mod experiment;
pub mod needle;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use error::{BuffonError, BuffonResult};
pub use experiment::{
    buffon_experiment, Experiment, ExperimentParams, DEFAULT_EXPERIMENT_PLANE_WIDTH,
    DEFAULT_TRIALS, THEORETICAL_CROSSING_PROBABILITY,
};
pub use needle::{available_range, cast_needle, Needle, Point, DEFAULT_CAST_PLANE_WIDTH};

/// Reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
