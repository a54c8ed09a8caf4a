use crate::rendering::{JsonRenderer, Renderer, TableRenderer, TextChartRenderer};
use crate::ui::types::config::OutputFormat;
use std::io::Write;

pub fn build_renderer<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Renderer + 'a> {
    match format {
        OutputFormat::Chart => Box::new(TextChartRenderer::new(out)),
        OutputFormat::Table => Box::new(TableRenderer::csv(out)),
        OutputFormat::Json => Box::new(JsonRenderer::new(out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        {
            let mut r = build_renderer(format, &mut buf);
            r.render(&[3.0], &[0.05]).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn each_format_picks_its_renderer() {
        assert!(rendered(OutputFormat::Chart).starts_with("Monte Carlo Pi Approximation\n"));
        assert!(rendered(OutputFormat::Table).starts_with("index,estimate,relative_error\n"));
        assert_eq!(
            rendered(OutputFormat::Json),
            "{\"estimates\":[3.0],\"errors\":[0.05]}\n"
        );
    }
}
