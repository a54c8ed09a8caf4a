use log::trace;
use rand::Rng;

use crate::estimation::{EstimationError, PiEstimate};

/// Draws `n` points uniformly from `[-1, 1] x [-1, 1]` and estimates π from the
/// fraction that lands inside the unit circle (boundary inclusive).
///
/// The random source is borrowed, so seeding it identically reproduces the
/// result exactly.
pub fn estimate_pi<R: Rng>(rng: &mut R, n: u64) -> Result<PiEstimate, EstimationError> {
    if n == 0 {
        return Err(EstimationError::invalid("sample count", n));
    }

    let mut inside = 0u64;
    for _ in 0..n {
        if sample_inside(rng) {
            inside += 1;
        }
    }

    let estimate = PiEstimate::from_counts(n, inside);
    trace!("{estimate}");
    Ok(estimate)
}

/// Signed entry point: non-positive counts are rejected instead of wrapping.
pub fn estimate_pi_signed<R: Rng>(rng: &mut R, n: i64) -> Result<PiEstimate, EstimationError> {
    let n = u64::try_from(n).map_err(|_| EstimationError::invalid("sample count", n))?;
    estimate_pi(rng, n)
}

#[inline]
fn sample_inside<R: Rng>(rng: &mut R) -> bool {
    let x: f64 = rng.random_range(-1.0..=1.0);
    let y: f64 = rng.random_range(-1.0..=1.0);
    x * x + y * y <= 1.0
}
