use crate::rendering::Renderer;
use crate::rendering::renderer::check_parallel;
use std::io::{Result, Write};

const AXIS_WIDTH: usize = 10;
const GAP: &str = "    ";

/// Two side-by-side ASCII line charts: estimate and relative error against
/// sweep index.
pub struct TextChartRenderer<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl<W: Write> TextChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: 48,
            height: 12,
        }
    }

    /// Plot area size in characters; both are clamped to at least 2.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(2);
        self.height = height.max(2);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn chart(&self, title: &str, y_label: &str, series: &[f64]) -> Vec<String> {
        let line_width = AXIS_WIDTH + 1 + self.width;
        let mut lines = vec![
            format!("{title:^line_width$}"),
            format!("{y_label:<line_width$}"),
        ];

        if series.is_empty() {
            for row in 0..self.height {
                let body = if row == self.height / 2 { "(no data)" } else { "" };
                lines.push(format!("{:>a$}|{body:^w$}", "", a = AXIS_WIDTH, w = self.width));
            }
        } else {
            let columns = bucket_means(series, self.width);
            let (lo, hi) = columns
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(*v), hi.max(*v))
                });
            let top = self.height - 1;
            let mut grid = vec![vec![' '; self.width]; self.height];
            for (c, v) in columns.iter().enumerate() {
                let level = if hi - lo > f64::EPSILON {
                    ((v - lo) / (hi - lo) * top as f64).round() as usize
                } else {
                    top / 2
                };
                grid[top - level.min(top)][c] = '*';
            }

            for (r, row) in grid.into_iter().enumerate() {
                let tick = if r == 0 {
                    format!("{hi:.4}")
                } else if r == top {
                    format!("{lo:.4}")
                } else {
                    String::new()
                };
                let body: String = row.into_iter().collect();
                lines.push(format!("{tick:>w$} |{body}", w = AXIS_WIDTH - 1));
            }
        }

        lines.push(format!("{:>a$}+{}", "", "-".repeat(self.width), a = AXIS_WIDTH));
        let x_label = format!("sweep index (0..{})", series.len().saturating_sub(1));
        lines.push(format!("{x_label:^line_width$}"));
        lines
    }
}

impl<W: Write> Renderer for TextChartRenderer<W> {
    fn render(&mut self, estimates: &[f64], errors: &[f64]) -> Result<()> {
        check_parallel(estimates, errors)?;

        let left = self.chart("Approximate Value", "~Pi", estimates);
        let right = self.chart("Error", "Actual vs expected", errors);

        writeln!(self.out, "Monte Carlo Pi Approximation")?;
        for (l, r) in left.iter().zip(right.iter()) {
            writeln!(self.out, "{l}{GAP}{r}")?;
        }
        self.out.flush()
    }
}

/// Averages `series` into at most `width` consecutive buckets.
fn bucket_means(series: &[f64], width: usize) -> Vec<f64> {
    let columns = series.len().min(width);
    (0..columns)
        .map(|c| {
            let from = c * series.len() / columns;
            let to = ((c + 1) * series.len() / columns).max(from + 1);
            let chunk = &series[from..to];
            chunk.iter().sum::<f64>() / chunk.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    fn render_to_string(est: &[f64], err: &[f64], w: usize, h: usize) -> String {
        let mut r = TextChartRenderer::new(Vec::new()).with_size(w, h);
        r.render(est, err).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn bucket_means_averages_consecutive_runs() {
        assert_eq!(bucket_means(&[1.0, 3.0, 5.0, 7.0], 2), vec![2.0, 6.0]);
        assert_eq!(bucket_means(&[1.0, 2.0], 10), vec![1.0, 2.0]);
        assert_eq!(bucket_means(&[1.0, 2.0, 3.0], 2), vec![1.0, 2.5]);
    }

    #[test]
    fn layout_has_heading_titles_and_fixed_line_count() {
        let est = [3.0, 3.2, 3.1, 3.14];
        let err = [0.05, 0.02, 0.01, 0.0005];
        let text = render_to_string(&est, &err, 8, 5);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Monte Carlo Pi Approximation");
        assert!(lines[1].contains("Approximate Value"));
        assert!(lines[1].contains("Error"));
        assert!(lines[2].contains("~Pi"));
        assert!(lines[2].contains("Actual vs expected"));
        // heading + title + y label + rows + axis + x label
        assert_eq!(lines.len(), 1 + 2 + 5 + 2);
        assert!(lines.last().unwrap().contains("sweep index (0..3)"));
    }

    #[test]
    fn extremes_land_on_top_and_bottom_rows() {
        let est = [0.0, 4.0];
        let err = [1.0, 0.2732];
        let text = render_to_string(&est, &err, 2, 3);
        let lines: Vec<&str> = text.lines().collect();
        let top = lines[3];
        let bottom = lines[5];
        assert!(top.starts_with("   4.0000 | *"), "{top:?}");
        assert!(bottom.starts_with("   0.0000 |* "), "{bottom:?}");
    }

    #[test]
    fn one_mark_per_column() {
        let est: Vec<f64> = (0..100).map(|i| 3.0 + (i as f64).sin() * 0.1).collect();
        let err: Vec<f64> = est.iter().map(|e| crate::estimation::relative_error(*e)).collect();
        let text = render_to_string(&est, &err, 20, 6);
        let marks = text.matches('*').count();
        assert_eq!(marks, 40);
    }

    #[test]
    fn empty_series_says_no_data() {
        let text = render_to_string(&[], &[], 12, 4);
        assert_eq!(text.matches("(no data)").count(), 2);
        assert!(!text.contains('*'));
    }

    #[test]
    fn mismatched_lengths_rejected_before_writing() {
        let mut r = TextChartRenderer::new(Vec::new());
        let err = r.render(&[1.0], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(r.into_inner().is_empty());
    }
}
