use crate::estimation::PiEstimate;
use std::fmt::{Display, Formatter, Result};

/// Ordered results of one sweep, in increasing sample count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceCurve {
    entries: Vec<PiEstimate>,
}

impl ConvergenceCurve {
    pub fn push(&mut self, estimate: PiEstimate) {
        self.entries.push(estimate)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<PiEstimate> {
        self.entries.last().copied()
    }
    pub fn entries(&self) -> &[PiEstimate] {
        &self.entries
    }

    pub fn sample_counts(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.samples).collect()
    }

    /// π estimates, one per sweep index.
    pub fn estimates(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.estimate).collect()
    }

    /// Relative errors, parallel to [`estimates`](Self::estimates).
    pub fn errors(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.relative_error).collect()
    }
}

impl Display for ConvergenceCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for e in &self.entries {
            writeln!(f, "{e}")?;
        }
        Ok(())
    }
}
