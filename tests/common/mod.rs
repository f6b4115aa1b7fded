use std::cell::RefCell;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use skillscope::Viewer;

/// Builds a minimal Chromium-style `History` database.
pub fn build_history_db(path: &Path, urls: &[&str], visit_times: &[i64]) {
    let conn = Connection::open(path).expect("open history");
    conn.execute_batch(
        "CREATE TABLE urls (id INTEGER PRIMARY KEY, url LONGVARCHAR, title LONGVARCHAR);
         CREATE TABLE visits (id INTEGER PRIMARY KEY, url INTEGER NOT NULL, visit_time INTEGER NOT NULL);",
    )
    .expect("create schema");
    for url in urls {
        conn.execute("INSERT INTO urls (url, title) VALUES (?1, '')", [url])
            .expect("insert url");
    }
    for time in visit_times {
        conn.execute("INSERT INTO visits (url, visit_time) VALUES (1, ?1)", [time])
            .expect("insert visit");
    }
}

#[derive(Default)]
pub struct RecordingViewer {
    pub opened: RefCell<Vec<PathBuf>>,
}

impl Viewer for RecordingViewer {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
