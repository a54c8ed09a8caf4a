use serde::Serialize;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter, Result};

/// One Monte Carlo estimate of π together with the counts it was derived from.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PiEstimate {
    pub samples: u64,
    pub inside: u64,
    pub estimate: f64,
    pub relative_error: f64,
}

impl PiEstimate {
    /// Builds the estimate `4 * inside / samples`.
    ///
    /// `samples` must be non-zero and `inside <= samples`; the estimator is the
    /// only caller and guarantees both.
    pub(crate) fn from_counts(samples: u64, inside: u64) -> Self {
        debug_assert!(samples > 0 && inside <= samples);
        let estimate = 4.0 * (inside as f64 / samples as f64);
        Self {
            samples,
            inside,
            estimate,
            relative_error: relative_error(estimate),
        }
    }
}

/// `|estimate - π| / π`
#[inline]
pub fn relative_error(estimate: f64) -> f64 {
    (estimate - PI).abs() / PI
}

impl Display for PiEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "n={}, inside={}, pi~{:.6}, rel_err={:.6}",
            self.samples, self.inside, self.estimate, self.relative_error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_inside_gives_four() {
        let e = PiEstimate::from_counts(10, 10);
        assert_eq!(e.estimate, 4.0);
        assert!((e.relative_error - (4.0 - PI) / PI).abs() < 1e-15);
    }

    #[test]
    fn none_inside_gives_zero_and_unit_error() {
        let e = PiEstimate::from_counts(7, 0);
        assert_eq!(e.estimate, 0.0);
        assert_eq!(e.relative_error, 1.0);
    }

    #[test]
    fn ratio_is_real_division() {
        let e = PiEstimate::from_counts(4, 3);
        assert_eq!(e.estimate, 3.0);
        assert_eq!(e.relative_error, relative_error(3.0));
    }

    #[test]
    fn display_is_compact() {
        let e = PiEstimate::from_counts(4, 3);
        assert_eq!(
            e.to_string(),
            format!("n=4, inside=3, pi~3.000000, rel_err={:.6}", relative_error(3.0))
        );
    }
}
