use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{HistoryError, Result};

pub const DEFAULT_CSV_PATH: &str = "chrome_history.csv";

#[derive(Serialize)]
struct WebsiteRow<'a> {
    #[serde(rename = "Website")]
    website: &'a str,
}

/// Writes the URL hand-off file: a `Website` header and one URL per row.
/// The whole document is encoded before anything touches disk.
pub fn write_urls_csv<S: AsRef<str>>(path: &Path, urls: &[S]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    if urls.is_empty() {
        writer.write_record(["Website"])?;
    }
    for url in urls {
        writer.serialize(WebsiteRow {
            website: url.as_ref(),
        })?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;

    info!(action = "write", component = "history_csv", path = ?path, url_count = urls.len(), "CSV file created");
    Ok(())
}

/// Reads every cell after the header row as a URL, one column at a time
/// (all of column 0, then all of column 1, ...). Rows shorter than the widest
/// row contribute an empty string for each missing cell.
pub fn read_urls_csv(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(HistoryError::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let width = reader.headers()?.len();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let width = records.iter().map(|r| r.len()).fold(width, usize::max);

    let mut urls = Vec::with_capacity(width * records.len());
    for column in 0..width {
        for record in &records {
            urls.push(record.get(column).unwrap_or_default().to_string());
        }
    }

    info!(action = "read", component = "history_csv", path = ?path, url_count = urls.len(), "CSV file loaded");
    Ok(urls)
}
