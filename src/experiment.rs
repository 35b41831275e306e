use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BuffonError, BuffonResult};
use crate::needle::{available_range, drop_needle, Point};

pub const DEFAULT_TRIALS: usize = 2084;
pub const DEFAULT_EXPERIMENT_PLANE_WIDTH: u32 = 10;

/// Crossing probability for a unit needle on lines one unit apart.
pub const THEORETICAL_CROSSING_PROBABILITY: f64 = 2.0 / PI;

/// Results of a batch of needle drops, stored column-wise in trial order.
///
/// `start`, `end` and `cross` always have the same length; row `i` of each
/// column belongs to trial `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub start: Vec<Point>,
    pub end: Vec<Point>,
    pub cross: Vec<bool>,
    pub plane: u32,
}

impl Experiment {
    fn debug_check_columns(&self) {
        debug_assert_eq!(self.start.len(), self.cross.len(), "start/cross columns differ");
        debug_assert_eq!(self.end.len(), self.cross.len(), "end/cross columns differ");
    }

    pub fn trials(&self) -> usize {
        self.debug_check_columns();
        self.cross.len()
    }

    pub fn crossings(&self) -> usize {
        self.cross.iter().filter(|&&c| c).count()
    }

    /// Fraction of needles that crossed a line, `None` for an empty experiment.
    pub fn crossing_rate(&self) -> Option<f64> {
        match self.trials() {
            0 => None,
            n => Some(self.crossings() as f64 / n as f64),
        }
    }

    /// Inverts P = 2/π. Undefined until at least one needle has crossed.
    pub fn pi_estimate(&self) -> Option<f64> {
        self.crossing_rate()
            .filter(|&rate| rate > 0.0)
            .map(|rate| 2.0 / rate)
    }

    /// Rows of `(start, end, cross)` in trial order.
    pub fn needles(&self) -> impl Iterator<Item = (Point, Point, bool)> + '_ {
        self.debug_check_columns();
        self.start
            .iter()
            .zip(&self.end)
            .zip(&self.cross)
            .map(|((&start, &end), &cross)| (start, end, cross))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentParams {
    pub trials: usize,
    pub plane_width: u32,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            plane_width: DEFAULT_EXPERIMENT_PLANE_WIDTH,
        }
    }
}

impl ExperimentParams {
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> BuffonResult<Experiment> {
        buffon_experiment(rng, self.trials, self.plane_width)
    }
}

/// Drops `trials` needles on a plane of width `plane_width`, one after another.
///
/// The width is checked before anything is drawn from `rng`, so a failed call
/// leaves the generator untouched.
pub fn buffon_experiment<R: Rng + ?Sized>(
    rng: &mut R,
    trials: usize,
    plane_width: u32,
) -> BuffonResult<Experiment> {
    let range = available_range(plane_width)? as f64;

    let mut start = Vec::new();
    let mut end = Vec::new();
    let mut cross = Vec::new();
    start
        .try_reserve_exact(trials)
        .and_then(|()| end.try_reserve_exact(trials))
        .and_then(|()| cross.try_reserve_exact(trials))
        .map_err(|e| BuffonError::invalid_parameter("trials", trials, e.to_string()))?;

    for _ in 0..trials {
        let needle = drop_needle(rng, range);
        start.push(needle.start);
        end.push(needle.end);
        cross.push(needle.cross);
    }

    let experiment = Experiment {
        start,
        end,
        cross,
        plane: plane_width,
    };

    debug!(
        trials,
        plane_width,
        crossings = experiment.crossings(),
        "experiment finished"
    );

    Ok(experiment)
}
