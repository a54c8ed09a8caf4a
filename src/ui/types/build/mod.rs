mod driver;
mod renderer;

pub use renderer::build_renderer;

use crate::estimation::ConvergenceCurve;
use crate::rendering::Renderer;
use crate::tasks::SweepDriver;
use crate::ui::types::config::SweepParams;
use anyhow::{Context, Result};

/// Runs the configured sweep to completion and hands the curve to `renderer`.
pub fn execute<R: Renderer + ?Sized>(
    params: &SweepParams,
    renderer: &mut R,
) -> Result<ConvergenceCurve> {
    let mut driver = SweepDriver::try_from(params).context("configuring sweep")?;
    driver.run().context("running sweep")?;
    let curve = driver.into_curve();
    renderer
        .render_curve(&curve)
        .context("rendering sweep results")?;
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRenderer;

    #[test]
    fn execute_renders_exactly_once() {
        let params = SweepParams {
            start: 10,
            stop: 100,
            step: 10,
            seed: Some(1),
            ..SweepParams::default()
        };
        let mut rec = RecordingRenderer::default();
        let curve = execute(&params, &mut rec).unwrap();

        assert_eq!(rec.calls.len(), 1);
        assert_eq!(rec.calls[0].0, curve.estimates());
        assert_eq!(rec.calls[0].1, curve.errors());
        assert_eq!(curve.len(), 10);
    }

    #[test]
    fn invalid_params_never_reach_renderer() {
        let params = SweepParams {
            start: 0,
            ..SweepParams::default()
        };
        let mut rec = RecordingRenderer::default();
        let err = execute(&params, &mut rec).unwrap_err();
        assert!(format!("{err:#}").contains("configuring sweep"));
        assert!(rec.calls.is_empty());
    }
}
