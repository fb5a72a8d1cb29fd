use anyhow::Result;

use crate::{models::Record, report::Report};

/// Search provides lookup of records by product name.
pub trait Search {
    /// Finds records whose product name contains `query`, ignoring case.
    ///
    /// # Arguments
    /// * `query` - Text to look for; an empty query matches every record.
    ///
    /// # Returns
    /// Matching records sorted ascending by unit price, ties in catalog order.
    fn find(&self, query: &str) -> Vec<Record>;
}

/// ReportWrite trait provides a method to emit a rendered report.
pub trait ReportWrite {
    /// Writes a report to the sink.
    ///
    /// # Arguments
    /// * `report` - The rendered search results.
    ///
    /// # Returns
    /// A Result indicating success or failure.
    fn write_report(&mut self, report: &Report) -> Result<()>;
}
