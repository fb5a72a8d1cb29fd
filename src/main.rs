use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

mod catalog;
mod config;
mod errors;
mod headers;
mod logging;
mod models;
mod parser;
mod report;
mod search;
mod traits;
mod writer;

use catalog::Catalog;
use config::Config;
use report::Report;
use search::SearchEngine;
use traits::{ReportWrite, Search};
use writer::{ConsoleWriter, HtmlFileWriter};

const EXIT_COMMAND: &str = "exit";
const PROMPT: &str = "Enter text to search (or 'exit' to quit): ";

fn main() -> Result<()> {
    logging::init();
    let config = Config::from_args(env::args())?;

    let mut catalog = Catalog::new();
    match catalog::discover(&config.prices_dir, &config.marker) {
        Ok(files) => {
            info!(dir = %config.prices_dir.display(), files = files.len(), "price files found");
            catalog.ingest(&files);
        }
        Err(err) => error!("{err:#}"),
    }
    if catalog.is_empty() {
        warn!("no records loaded, every search will come back empty");
    } else {
        info!(records = catalog.len(), "catalog ready");
    }

    let engine = SearchEngine::new(&catalog);
    let mut console = ConsoleWriter::new();
    let mut html = HtmlFileWriter::new(&config.output_path);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let query = line?;
        if is_exit(&query) {
            break;
        }

        if let Err(err) = handle_query(&engine, &query, &mut console, &mut html) {
            error!("{err:#}");
        }
    }
    println!("The end");

    Ok(())
}

fn is_exit(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Runs one search and emits its report.
///
/// Returns `false` when nothing matched; the sinks are left untouched then.
fn handle_query(
    engine: &impl Search,
    query: &str,
    console: &mut impl ReportWrite,
    html: &mut HtmlFileWriter,
) -> Result<bool> {
    let found = engine.find(query);
    if found.is_empty() {
        println!("No products found.");
        return Ok(false);
    }

    let report = Report::new(&found);
    console.write_report(&report)?;
    html.write_report(&report)?;
    println!("Report saved to \"{}\"", html.path().display());
    Ok(true)
}
