use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::orientation::classify_four;
use crate::geometry::point::Point;
use crate::geometry::sample::sample_in_triangle;
use crate::geometry::triangle::Triangle;

/// Probability that four uniform points in a triangle are in convex
/// position (Sylvester's four-point problem, triangle case). Consumers
/// plotting a run draw their reference line at this value.
pub const ANALYTICAL_PROBABILITY: f64 = 2.0 / 3.0;

/// Configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of pooled points; also the number of estimation iterations.
    pub samples: usize,
    /// Seed for the random number generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            seed: None,
        }
    }
}

/// Runs the simulation over the fixed equilateral base triangle.
///
/// Returns the running estimate: element `i` (0-based) is the fraction of
/// the first `i + 1` draws whose four points were in convex position. With
/// a seed the run is fully reproducible; without one the generator is seeded
/// from entropy.
///
/// # Examples
///
/// ```
/// use sylvester::{run, SimulationConfig, ANALYTICAL_PROBABILITY};
///
/// let config = SimulationConfig {
///     samples: 2_000,
///     seed: Some(42),
/// };
/// let estimates = run(&config).unwrap();
/// assert_eq!(estimates.len(), 2_000);
/// let last = estimates[estimates.len() - 1];
/// assert!((last - ANALYTICAL_PROBABILITY).abs() < 0.1);
/// ```
pub fn run(config: &SimulationConfig) -> Result<Vec<f64>> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    run_in_triangle(&Triangle::unit_equilateral(), config.samples, &mut rng)
}

/// Runs the simulation over a caller-supplied triangle and generator.
///
/// The run has two phases. First a pool of `samples` points is drawn
/// uniformly from `tri`. Then, for `i = 1..=samples`, four distinct points
/// are drawn from the pool (without replacement within the draw; the pool
/// itself is never consumed, so a point may appear in many draws),
/// classified, and the cumulative convex fraction is appended to the
/// result. The loop is sequential: each element extends the cumulative
/// count of all prior iterations.
///
/// Fails with [`Error::SampleCountTooSmall`] before any sampling when
/// `samples < 4`, since no four-point draw can be formed.
pub fn run_in_triangle<R: Rng + ?Sized>(
    tri: &Triangle,
    samples: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if samples < 4 {
        return Err(Error::SampleCountTooSmall(samples));
    }

    let pool = generate_pool(tri, samples, rng);
    debug!("generated pool of {} points", pool.len());

    let mut estimates = Vec::with_capacity(samples);
    let mut quad_count = 0usize;
    for i in 1..=samples {
        let draw: Vec<Point> = pool.choose_multiple(rng, 4).copied().collect();
        if classify_four(draw[0], draw[1], draw[2], draw[3]) == 1 {
            quad_count += 1;
        }
        estimates.push(quad_count as f64 / i as f64);
    }

    info!(
        "{} of {} draws were convex (estimate {:.4}, analytical {:.4})",
        quad_count,
        samples,
        quad_count as f64 / samples as f64,
        ANALYTICAL_PROBABILITY
    );
    Ok(estimates)
}

/// Builds the read-only point pool.
///
/// Each point is sampled from its own child generator, seeded from the
/// caller's stream. The derived streams make the pool independent of
/// evaluation order, so the `parallel` feature changes wall-clock time but
/// not a single bit of the output.
fn generate_pool<R: Rng + ?Sized>(tri: &Triangle, n: usize, rng: &mut R) -> Vec<Point> {
    let seeds: Vec<u64> = (0..n).map(|_| rng.gen()).collect();

    #[cfg(feature = "parallel")]
    let pool: Vec<Point> = seeds
        .par_iter()
        .map(|&s| sample_in_triangle(tri, &mut ChaCha20Rng::seed_from_u64(s)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let pool: Vec<Point> = seeds
        .iter()
        .map(|&s| sample_in_triangle(tri, &mut ChaCha20Rng::seed_from_u64(s)))
        .collect();

    pool
}
