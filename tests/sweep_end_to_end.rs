use mcpi::estimation::{EstimationError, estimate_pi, estimate_pi_signed};
use mcpi::rendering::{Renderer, TextChartRenderer};
use mcpi::tasks::{SweepDriver, run_sweep};
use mcpi::ui::types::build::{build_renderer, execute};
use mcpi::ui::types::config::{OutputFormat, SweepParams};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

#[test]
fn reference_sweep_has_thousand_bounded_points() {
    let mut rng = StdRng::seed_from_u64(2024);
    let curve = run_sweep(&mut rng, 10, 10_000, 10).unwrap();
    assert_eq!(curve.len(), 1000);
    assert_eq!(curve.sample_counts().first(), Some(&10));
    assert_eq!(curve.sample_counts().last(), Some(&10_000));
    for e in curve.entries() {
        assert!((0.0..=4.0).contains(&e.estimate));
        assert_eq!(e.relative_error, (e.estimate - PI).abs() / PI);
    }
    // the tail of the sweep draws ~10k points per estimate
    let tail = &curve.estimates()[900..];
    let mean = tail.iter().sum::<f64>() / tail.len() as f64;
    assert!((mean - PI).abs() < 0.05, "mean={mean}");
}

#[test]
fn invalid_counts_surface_as_invalid_argument() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        estimate_pi(&mut rng, 0),
        Err(EstimationError::InvalidArgument { .. })
    ));
    assert!(matches!(
        estimate_pi_signed(&mut rng, -5),
        Err(EstimationError::InvalidArgument { .. })
    ));
}

#[test]
fn closure_renderer_receives_parallel_sequences() {
    let params = SweepParams {
        start: 1,
        stop: 1,
        step: 1,
        seed: Some(11),
        ..SweepParams::default()
    };
    let mut got = Vec::new();
    let mut plot = |est: &[f64], err: &[f64]| -> std::io::Result<()> {
        got.extend(est.iter().copied().zip(err.iter().copied()));
        Ok(())
    };
    execute(&params, &mut plot).unwrap();

    assert_eq!(got.len(), 1);
    let (est, err) = got[0];
    assert!(
        (est == 0.0 && err == 1.0) || (est == 4.0 && (err - 0.2732).abs() < 1e-4),
        "({est}, {err})"
    );
}

#[test]
fn chart_output_for_seeded_driver() {
    let mut driver = SweepDriver::new(10, 200, 10, 4).unwrap();
    driver.run().unwrap();

    let mut chart = TextChartRenderer::new(Vec::new()).with_size(19, 6);
    chart.render_curve(driver.curve()).unwrap();
    let text = String::from_utf8(chart.into_inner()).unwrap();
    assert!(text.starts_with("Monte Carlo Pi Approximation"));
    assert_eq!(text.matches('*').count(), 2 * 19);
    assert!(text.contains("sweep index (0..19)"));
}

#[test]
fn json_config_drives_json_output() {
    let params =
        SweepParams::from_json_str(r#"{"start": 5, "stop": 25, "step": 5, "seed": 3, "output": "json"}"#)
            .unwrap();
    assert_eq!(params.output, OutputFormat::Json);

    let mut buf = Vec::new();
    let curve = {
        let mut r = build_renderer(params.output, &mut buf);
        execute(&params, r.as_mut()).unwrap()
    };
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    let estimates: Vec<f64> = serde_json::from_value(v["estimates"].clone()).unwrap();
    assert_eq!(estimates, curve.estimates());
    assert_eq!(estimates.len(), 5);
}
