use chrono::{DateTime, Utc};
use rusqlite::{Connection, OpenFlags, Result as SqliteResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{HistoryError, Result};

pub const DEFAULT_BROWSER: &str = "chrome";
pub const DEFAULT_BACKUP_PATH: &str = "backup_history/History_backup";

// 1601-01-01T00:00:00Z relative to the Unix epoch
const CHROME_EPOCH_OFFSET_SECS: i64 = -11_644_473_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub earliest: String,
    pub latest: String,
    pub days: i64,
}

/// Resolves the `History` database of a browser profile without touching the
/// environment, so every platform layout can be checked from any host.
pub fn history_path_for(
    browser: &str,
    os: &str,
    home: Option<&Path>,
    local_app_data: Option<&Path>,
) -> Result<PathBuf> {
    let home = || home.ok_or(HistoryError::MissingEnv("HOME"));
    let local_app_data = || local_app_data.ok_or(HistoryError::MissingEnv("LOCALAPPDATA"));

    let path = match (browser.to_lowercase().as_str(), os) {
        ("chrome", "windows") => local_app_data()?.join("Google/Chrome/User Data/Default/History"),
        ("chrome", "macos") => {
            home()?.join("Library/Application Support/Google/Chrome/Default/History")
        }
        ("chrome", "linux") => home()?.join(".config/google-chrome/Default/History"),
        ("vivaldi", "windows") => local_app_data()?.join("Vivaldi/User Data/Default/History"),
        ("vivaldi", "macos") => home()?.join("Library/Application Support/Vivaldi/Default/History"),
        ("vivaldi", "linux") => home()?.join(".config/vivaldi/Default/History"),
        _ => {
            return Err(HistoryError::UnsupportedBrowser {
                browser: browser.to_string(),
                os: os.to_string(),
            })
        }
    };

    Ok(path)
}

pub fn get_browser_history_path(browser: &str) -> Result<PathBuf> {
    let system = env::consts::OS;
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from);
    let local_app_data = env::var_os("LOCALAPPDATA").map(PathBuf::from);

    let path = history_path_for(browser, system, home.as_deref(), local_app_data.as_deref())?;

    info!(action = "resolve", component = "browser_path", browser = browser, path = ?path, "Browser history path resolved");
    Ok(path)
}

/// Copies the live history database so it can be read without holding the
/// browser's lock. The copy is left in place afterwards.
pub fn copy_history_database(history_path: &Path, backup_path: &Path) -> Result<PathBuf> {
    let start_time = Instant::now();
    info!(action = "start", component = "database_copy", "Copying browser history database");
    info!(action = "copy", component = "database_copy", source = ?history_path, destination = ?backup_path, "Database copy paths");

    if !history_path.exists() {
        return Err(HistoryError::SourceNotFound(history_path.to_path_buf()));
    }

    if let Some(parent) = backup_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::copy(history_path, backup_path)?;

    let copy_time = start_time.elapsed();
    info!(action = "complete", component = "database_copy", duration_ms = copy_time.as_millis(), retained = ?backup_path, "Database copy completed");
    Ok(backup_path.to_path_buf())
}

pub fn open_read_only(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(HistoryError::SourceNotFound(path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    debug!(action = "open", component = "database", path = ?path, "Opened database read-only");
    Ok(conn)
}

fn has_table(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let mut rows = stmt.query([name])?;
    Ok(rows.next()?.is_some())
}

pub fn read_distinct_urls(conn: &Connection) -> Result<Vec<String>> {
    let start_time = Instant::now();

    let urls: Vec<String> = conn
        .prepare("SELECT DISTINCT urls.url FROM urls")?
        .query_map([], |row| row.get(0))?
        .collect::<SqliteResult<Vec<String>>>()?;

    info!(
        action = "query",
        component = "url_extraction",
        url_count = urls.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Read distinct URLs"
    );
    Ok(urls)
}

pub fn get_date_range(conn: &Connection) -> Result<Option<DateRange>> {
    let start_time = Instant::now();

    if !has_table(conn, "visits")? {
        warn!(action = "skip", component = "date_range_query", "No visits table in history database");
        return Ok(None);
    }

    let (earliest_timestamp, latest_timestamp): (Option<i64>, Option<i64>) = conn.query_row(
        "SELECT MIN(visit_time), MAX(visit_time) FROM visits",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let (Some(earliest), Some(latest)) = (earliest_timestamp, latest_timestamp) else {
        warn!(
            action = "complete",
            component = "date_range_query",
            duration_ms = start_time.elapsed().as_millis(),
            "No visit data found"
        );
        return Ok(None);
    };

    // Chrome uses microseconds since 1601-01-01
    let Some(chrome_epoch) = DateTime::<Utc>::from_timestamp(CHROME_EPOCH_OFFSET_SECS, 0) else {
        return Ok(None);
    };
    let (Some(earliest_date), Some(latest_date)) = (
        chrome_epoch.checked_add_signed(chrono::Duration::microseconds(earliest)),
        chrome_epoch.checked_add_signed(chrono::Duration::microseconds(latest)),
    ) else {
        warn!(
            action = "complete",
            component = "date_range_query",
            earliest_timestamp = earliest,
            latest_timestamp = latest,
            "Visit timestamps out of range"
        );
        return Ok(None);
    };

    let range = DateRange {
        earliest: earliest_date.format("%B %-d, %Y").to_string(),
        latest: latest_date.format("%B %-d, %Y").to_string(),
        days: (latest_date - earliest_date).num_days(),
    };

    info!(
        action = "complete",
        component = "date_range_query",
        earliest_date = %range.earliest,
        latest_date = %range.latest,
        days_between = range.days,
        duration_ms = start_time.elapsed().as_millis(),
        "Date range query completed"
    );
    Ok(Some(range))
}

#[derive(Debug)]
pub struct HistorySnapshot {
    pub backup_path: PathBuf,
    pub urls: Vec<String>,
    pub date_range: Option<DateRange>,
}

/// Copies the history store to `backup_path`, then reads the distinct URLs
/// and the visit date range from the copy. The connection is closed before
/// returning, on success and on error.
pub fn read_history(history_path: &Path, backup_path: &Path) -> Result<HistorySnapshot> {
    let backup_path = copy_history_database(history_path, backup_path)?;
    let conn = open_read_only(&backup_path)?;
    info!(action = "connect", component = "history_read", "Connected to database");

    let date_range = get_date_range(&conn)?;
    let urls = read_distinct_urls(&conn)?;
    drop(conn);

    Ok(HistorySnapshot {
        backup_path,
        urls,
        date_range,
    })
}
