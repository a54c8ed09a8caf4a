use crate::estimation::ConvergenceCurve;
use std::io::{Error, ErrorKind, Result};

/// Presents the two parallel sequences produced by a sweep.
///
/// Any `FnMut(&[f64], &[f64]) -> io::Result<()>` closure is a renderer, so
/// callers can inject their own plotting without touching the sweep code.
pub trait Renderer {
    fn render(&mut self, estimates: &[f64], errors: &[f64]) -> Result<()>;

    fn render_curve(&mut self, curve: &ConvergenceCurve) -> Result<()> {
        self.render(&curve.estimates(), &curve.errors())
    }
}

impl<F> Renderer for F
where
    F: FnMut(&[f64], &[f64]) -> Result<()>,
{
    fn render(&mut self, estimates: &[f64], errors: &[f64]) -> Result<()> {
        self(estimates, errors)
    }
}

pub(crate) fn check_parallel(estimates: &[f64], errors: &[f64]) -> Result<()> {
    if estimates.len() != errors.len() {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!(
                "estimates and errors differ in length ({} vs {})",
                estimates.len(),
                errors.len()
            ),
        ));
    }
    Ok(())
}
