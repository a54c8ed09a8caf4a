use crate::estimation::{ConvergenceCurve, EstimationError, PiEstimate, estimate_pi};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Estimates π for `n = start, start + step, ...` while `n <= stop`.
///
/// Any estimator failure aborts the whole sweep; no partial curve is returned.
pub fn run_sweep<R: Rng>(
    rng: &mut R,
    start: u64,
    stop: u64,
    step: u64,
) -> Result<ConvergenceCurve, EstimationError> {
    check_bounds(start, stop, step)?;

    let mut curve = ConvergenceCurve::default();
    for n in sample_counts(start, stop, step) {
        curve.push(estimate_pi(rng, n)?);
    }
    Ok(curve)
}

fn check_bounds(start: u64, stop: u64, step: u64) -> Result<(), EstimationError> {
    if start == 0 {
        return Err(EstimationError::invalid("start", start));
    }
    if stop == 0 {
        return Err(EstimationError::invalid("stop", stop));
    }
    if step == 0 {
        return Err(EstimationError::invalid("step", step));
    }
    Ok(())
}

/// Inclusive arithmetic progression; ends early instead of overflowing.
fn sample_counts(start: u64, stop: u64, step: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(start), move |n| n.checked_add(step)).take_while(move |n| *n <= stop)
}

/// Owns the random source and the curve for one sweep run.
pub struct SweepDriver {
    rng: StdRng,
    start: u64,
    stop: u64,
    step: u64,

    curve: ConvergenceCurve,
    progress_tx: Option<Sender<PiEstimate>>,
}

impl SweepDriver {
    pub fn new(start: u64, stop: u64, step: u64, seed: u64) -> Result<Self, EstimationError> {
        Self::with_rng(StdRng::seed_from_u64(seed), start, stop, step)
    }

    /// Seeds from the operating system's entropy source.
    pub fn from_entropy(start: u64, stop: u64, step: u64) -> Result<Self, EstimationError> {
        let rng =
            StdRng::try_from_os_rng().map_err(|e| EstimationError::RandomSource(e.to_string()))?;
        Self::with_rng(rng, start, stop, step)
    }

    pub fn with_rng(
        rng: StdRng,
        start: u64,
        stop: u64,
        step: u64,
    ) -> Result<Self, EstimationError> {
        check_bounds(start, stop, step)?;
        Ok(Self {
            rng,
            start,
            stop,
            step,
            curve: ConvergenceCurve::default(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<PiEstimate>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Runs the sweep, replacing any curve from a previous run.
    pub fn run(&mut self) -> Result<(), EstimationError> {
        let started = Instant::now();
        info!(
            "sweep start={} stop={} step={}",
            self.start, self.stop, self.step
        );

        self.curve = ConvergenceCurve::default();
        for n in sample_counts(self.start, self.stop, self.step) {
            let estimate = match estimate_pi(&mut self.rng, n) {
                Ok(e) => e,
                Err(e) => {
                    self.curve = ConvergenceCurve::default();
                    return Err(e);
                }
            };

            if let Some(tx) = &self.progress_tx {
                let _ = tx.send(estimate);
            }
            self.curve.push(estimate);
        }

        match self.curve.latest() {
            Some(last) => info!(
                "sweep done: {} estimates in {:.3}s, last {last}",
                self.curve.len(),
                started.elapsed().as_secs_f64()
            ),
            None => debug!("sweep visited no sample counts"),
        }
        Ok(())
    }

    pub fn curve(&self) -> &ConvergenceCurve {
        &self.curve
    }

    pub fn into_curve(self) -> ConvergenceCurve {
        self.curve
    }
}
