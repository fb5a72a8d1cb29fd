use crate::report::{COLUMNS, Report};
use crate::traits::ReportWrite;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

/// Prints reports as a plain table on standard output.
pub struct ConsoleWriter<W = Stdout> {
    out: W,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn with_writer(out: W) -> Self {
        ConsoleWriter { out }
    }
}

impl<W: Write> ReportWrite for ConsoleWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.out, "{}", COLUMNS.join(", "))?;
        for row in report.rows() {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Overwrites an HTML file with each report's document.
pub struct HtmlFileWriter {
    path: PathBuf,
}

impl HtmlFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HtmlFileWriter { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ReportWrite for HtmlFileWriter {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        fs::write(&self.path, report.document())
            .with_context(|| format!("cannot write report to {}", self.path.display()))
    }
}
