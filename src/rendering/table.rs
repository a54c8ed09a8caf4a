use crate::rendering::Renderer;
use crate::rendering::renderer::check_parallel;
use std::io::{Result, Write};

/// Delimited rows `index, estimate, relative_error`, one per sweep index.
pub struct TableRenderer<W: Write> {
    out: W,
    delimiter: char,
}

impl<W: Write> TableRenderer<W> {
    pub fn csv(out: W) -> Self {
        Self {
            out,
            delimiter: ',',
        }
    }

    pub fn tsv(out: W) -> Self {
        Self {
            out,
            delimiter: '\t',
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render(&mut self, estimates: &[f64], errors: &[f64]) -> Result<()> {
        check_parallel(estimates, errors)?;

        writeln!(
            self.out,
            "index{d}estimate{d}relative_error",
            d = self.delimiter
        )?;
        for (i, (est, err)) in estimates.iter().zip(errors).enumerate() {
            writeln!(self.out, "{i}{d}{est:.12}{d}{err:.12}", d = self.delimiter)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_with_two_rows() {
        let mut r = TableRenderer::csv(Vec::new());
        r.render(&[3.0, 4.0], &[0.25, 0.5]).unwrap();
        let got = String::from_utf8(r.into_inner()).unwrap();
        let exp = "\
index,estimate,relative_error
0,3.000000000000,0.250000000000
1,4.000000000000,0.500000000000
";
        assert_eq!(got, exp);
    }

    #[test]
    fn tsv_with_one_row() {
        let mut r = TableRenderer::tsv(Vec::new());
        r.render(&[0.0], &[1.0]).unwrap();
        let got = String::from_utf8(r.into_inner()).unwrap();
        assert_eq!(
            got,
            "index\testimate\trelative_error\n0\t0.000000000000\t1.000000000000\n"
        );
    }

    #[test]
    fn empty_is_header_only() {
        let mut r = TableRenderer::csv(Vec::new());
        r.render(&[], &[]).unwrap();
        assert_eq!(
            String::from_utf8(r.into_inner()).unwrap(),
            "index,estimate,relative_error\n"
        );
    }
}
