pub mod args;
pub mod browser;
pub mod domain;
pub mod error;
pub mod history_csv;
pub mod labels;
pub mod report;
pub mod sqlite;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use browser::{analyze_history_csv, analyze_history_csv_with, export_browser_history};
pub use error::HistoryError;
pub use report::{NoopViewer, SystemViewer, Viewer};
pub use stats::{rank_domains, AnalysisResult, DomainCounts, ExportSummary, RankedEntry};
