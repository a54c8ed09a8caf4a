use crate::rendering::Renderer;
use std::io::Result;

/// Keeps a copy of every pair of sequences it is asked to render.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(Vec<f64>, Vec<f64>)>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, estimates: &[f64], errors: &[f64]) -> Result<()> {
        self.calls.push((estimates.to_vec(), errors.to_vec()));
        Ok(())
    }
}
