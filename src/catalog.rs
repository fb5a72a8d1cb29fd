use crate::{headers, models::Record, parser};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

const DELIMITER: u8 = b',';

/// Lists the price files directly inside `dir`, sorted by file name.
///
/// Only regular files whose name contains `marker` (case-sensitive) are kept.
/// Entries that cannot be inspected are logged and skipped; only an
/// unreadable `dir` is an error.
pub fn discover(dir: impl AsRef<Path>, marker: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err).with_context(|| format!("cannot list {}", dir.display()));
            }
            Err(err) => {
                warn!(dir = %dir.display(), "skipping directory entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().contains(marker) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Counters describing one ingestion pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub rows_loaded: usize,
    pub rows_skipped: usize,
}

/// All records ingested so far, in file-then-row order.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Loads every file in order, appending their valid rows.
    ///
    /// A file whose header row cannot be resolved (or which cannot be opened)
    /// is skipped as a whole; a bad row is skipped on its own. Both are logged
    /// and counted, never returned.
    ///
    /// # Arguments
    /// * `paths` - Price files to load, in the order they should appear.
    ///
    /// # Returns
    /// Counts of loaded and skipped files and rows.
    pub fn ingest<P: AsRef<Path>>(&mut self, paths: &[P]) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for path in paths {
            let path = path.as_ref();
            match self.ingest_file(path, &mut summary) {
                Ok(rows) => {
                    summary.files_loaded += 1;
                    debug!(file = %path.display(), rows, "price file loaded");
                }
                Err(err) => {
                    summary.files_skipped += 1;
                    warn!(file = %path.display(), "skipping file: {err:#}");
                }
            }
        }

        info!(
            files_loaded = summary.files_loaded,
            files_skipped = summary.files_skipped,
            rows_loaded = summary.rows_loaded,
            rows_skipped = summary.rows_skipped,
            "ingestion finished"
        );
        summary
    }

    fn ingest_file(&mut self, path: &Path, summary: &mut IngestSummary) -> Result<usize> {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("cannot open {label}"))?;

        let header_row = reader
            .headers()
            .with_context(|| format!("cannot read header row of {label}"))?
            .clone();
        let indices = headers::resolve(header_row.iter())
            .with_context(|| format!("unusable header row in {label}"))?;

        let mut loaded = 0;
        for (idx, result) in reader.records().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(err) => {
                    summary.rows_skipped += 1;
                    warn!(file = %label, "skipping unreadable row: {err}");
                    continue;
                }
            };
            let line = row.position().map_or(idx as u64 + 2, |pos| pos.line());
            let cells: Vec<&str> = row.iter().collect();

            match parser::parse(&cells, &indices, &label) {
                Ok(record) => {
                    self.records.push(record);
                    loaded += 1;
                }
                Err(err) => {
                    summary.rows_skipped += 1;
                    warn!(file = %label, line, row = ?cells, "skipping row: {err}");
                }
            }
        }

        summary.rows_loaded += loaded;
        Ok(loaded)
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn test_discover_filters_by_marker_and_sorts() -> Result<()> {
        let dir = TempDir::new()?;
        write(&dir, "price_2.csv", "")?;
        write(&dir, "price_1.csv", "")?;
        write(&dir, "Price_3.csv", "")?;
        write(&dir, "notes.txt", "")?;
        fs::create_dir(dir.path().join("price_dir"))?;

        let names: Vec<String> = discover(dir.path(), "price")?
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["price_1.csv", "price_2.csv"]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_skips_dangling_symlink() -> Result<()> {
        let dir = TempDir::new()?;
        write(&dir, "price_1.csv", "")?;
        std::os::unix::fs::symlink(
            dir.path().join("does_not_exist"),
            dir.path().join("zz_unrelated_link"),
        )?;

        let files = discover(dir.path(), "price")?;
        assert_eq!(files, vec![dir.path().join("price_1.csv")]);
        Ok(())
    }

    #[test]
    fn test_discover_missing_directory() -> Result<()> {
        let dir = TempDir::new()?;
        assert!(discover(dir.path().join("absent"), "price").is_err());
        Ok(())
    }

    #[test]
    fn test_ingest_keeps_file_then_row_order() -> Result<()> {
        let dir = TempDir::new()?;
        let first = write(&dir, "price_a.csv", "товар,цена,вес\nA1,10,1\nA2,20,1\n")?;
        let second = write(&dir, "price_b.csv", "масса,розница,название\n2,30,B1\n")?;

        let mut catalog = Catalog::new();
        let summary = catalog.ingest(&[first, second]);

        let products: Vec<&str> = catalog.records().iter().map(|r| r.product().as_str()).collect();
        assert_eq!(products, vec!["A1", "A2", "B1"]);
        assert_eq!(catalog.records()[2].unit_price(), 15.0);
        assert_eq!(catalog.records()[2].source_label(), "price_b.csv");
        assert_eq!(summary.files_loaded, 2);
        assert_eq!(summary.rows_loaded, 3);
        Ok(())
    }

    #[test]
    fn test_ingest_skips_bad_rows_and_unresolvable_files() -> Result<()> {
        let dir = TempDir::new()?;
        let good = write(
            &dir,
            "price_good.csv",
            "Наименование,Розница,Фасовка\nApple,100,2\nPear,abc,1\nPlum,30,0\nShort\nFig,40,4\n",
        )?;
        let bad = write(&dir, "price_bad.csv", "name,price,weight\nKiwi,10,1\n")?;

        let mut catalog = Catalog::new();
        let summary = catalog.ingest(&[good, bad]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            summary,
            IngestSummary {
                files_loaded: 1,
                files_skipped: 1,
                rows_loaded: 2,
                rows_skipped: 3,
            }
        );
        Ok(())
    }

    #[test]
    fn test_ingest_missing_file_is_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        let mut catalog = Catalog::new();
        let summary = catalog.ingest(&[dir.path().join("price_missing.csv")]);

        assert!(catalog.is_empty());
        assert_eq!(summary.files_skipped, 1);
        Ok(())
    }

    #[test]
    fn test_ingest_empty_file_is_skipped() -> Result<()> {
        let dir = TempDir::new()?;
        let empty = write(&dir, "price_empty.csv", "")?;
        let mut catalog = Catalog::new();
        let summary = catalog.ingest(&[empty]);

        assert!(catalog.is_empty());
        assert_eq!(summary.files_skipped, 1);
        Ok(())
    }
}
