use crate::rendering::Renderer;
use crate::rendering::renderer::check_parallel;
use serde::Serialize;
use std::io::{Result, Write};

#[derive(Serialize)]
struct Series<'a> {
    estimates: &'a [f64],
    errors: &'a [f64],
}

/// Writes `{"estimates":[...],"errors":[...]}` followed by a newline.
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, estimates: &[f64], errors: &[f64]) -> Result<()> {
        check_parallel(estimates, errors)?;

        let series = Series { estimates, errors };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, &series)?;
        } else {
            serde_json::to_writer(&mut self.out, &series)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn compact_document() {
        let mut r = JsonRenderer::new(Vec::new());
        r.render(&[3.0, 4.0], &[0.5, 0.25]).unwrap();
        let got = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(got, "{\"estimates\":[3.0,4.0],\"errors\":[0.5,0.25]}\n");
    }

    #[test]
    fn pretty_document_parses_back() {
        let mut r = JsonRenderer::new(Vec::new()).pretty();
        r.render(&[3.125], &[0.005]).unwrap();
        let bytes = r.into_inner();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v, json!({"estimates": [3.125], "errors": [0.005]}));
    }
}
