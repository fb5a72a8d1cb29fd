use crate::models::Record;
use getset::{CopyGetters, Getters};
use serde::Serialize;
use std::fmt::{self, Write};

pub const COLUMNS: [&str; 6] = ["№", "Naming", "Price", "Weight", "File", "Price-per-kg"];

const TITLE: &str = "Product positions";

const STYLE: &str = "\
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 8px; text-align: left; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
        th { font-weight: bold; }
        td.product { max-width: 80px; }
        td.price, td.weight, td.filename, td.price_per_kg { max-width: 10px; }";

/// One result line, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters)]
pub struct DisplayRow {
    #[getset(get_copy = "pub")]
    index: usize,
    #[getset(get = "pub")]
    product: String,
    #[getset(get = "pub")]
    price: String,
    #[getset(get = "pub")]
    weight: String,
    #[getset(get = "pub")]
    file: String,
    #[getset(get = "pub")]
    unit_price: String,
}

impl DisplayRow {
    fn new(index: usize, record: &Record) -> Self {
        Self {
            index,
            product: record.product().clone(),
            price: record.price().to_string(),
            weight: record.weight().to_string(),
            file: record.source_label().clone(),
            unit_price: format!("{:.2}", record.unit_price()),
        }
    }

    fn cells(&self) -> [(&'static str, String); 6] {
        [
            ("index", self.index.to_string()),
            ("product", self.product.clone()),
            ("price", self.price.clone()),
            ("weight", self.weight.clone()),
            ("filename", self.file.clone()),
            ("price_per_kg", self.unit_price.clone()),
        ]
    }
}

impl fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}  {}  {}  {}  {}",
            self.index, self.product, self.price, self.weight, self.file, self.unit_price
        )
    }
}

/// Rendered output of one search: the HTML document and the console rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    document: String,
    rows: Vec<DisplayRow>,
}

impl Report {
    pub fn new(results: &[Record]) -> Self {
        Self {
            document: render(results),
            rows: render_rows(results),
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }
}

/// Projects results into display rows, numbered from 1 in result order.
pub fn render_rows(results: &[Record]) -> Vec<DisplayRow> {
    results
        .iter()
        .enumerate()
        .map(|(idx, record)| DisplayRow::new(idx + 1, record))
        .collect()
}

/// Renders results as a standalone HTML document.
pub fn render(results: &[Record]) -> String {
    render_document(&render_rows(results))
}

fn render_document(rows: &[DisplayRow]) -> String {
    let mut html = String::new();
    let _ = write_document(&mut html, rows);
    html
}

fn write_document(out: &mut String, rows: &[DisplayRow]) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(out, "    <title>{TITLE}</title>")?;
    writeln!(out, "    <style>\n{STYLE}\n    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "    <table>")?;

    writeln!(out, "        <tr>")?;
    for column in COLUMNS {
        writeln!(out, "            <th>{}</th>", escape(column))?;
    }
    writeln!(out, "        </tr>")?;

    for row in rows {
        writeln!(out, "        <tr>")?;
        for (class, value) in row.cells() {
            if class == "index" {
                writeln!(out, "            <td>{}</td>", escape(&value))?;
            } else {
                writeln!(out, "            <td class=\"{class}\">{}</td>", escape(&value))?;
            }
        }
        writeln!(out, "        </tr>")?;
    }

    writeln!(out, "    </table>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
