mod common;

use std::fs;

use skillscope::args::ExportArgs;
use skillscope::labels::{job_positions, soft_skills};
use skillscope::{
    analyze_history_csv, analyze_history_csv_with, export_browser_history, HistoryError,
    NoopViewer, RankedEntry,
};

use common::{build_history_db, RecordingViewer};

const JAN_1_2024: i64 = 13_348_540_800_000_000;
const MAR_1_2024: i64 = 13_353_724_800_000_000;

fn export_args(dir: &std::path::Path) -> ExportArgs {
    ExportArgs {
        browser: "chrome".to_string(),
        history: Some(dir.join("History")),
        backup: dir.join("backup_history").join("History_backup"),
        csv: dir.join("chrome_history.csv"),
    }
}

#[test]
fn history_to_report_end_to_end() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let dir = temp_dir.path();
    build_history_db(
        &dir.join("History"),
        &[
            "https://github.com/a",
            "https://github.com/b",
            "https://lichess.org/x",
        ],
        &[JAN_1_2024, MAR_1_2024],
    );

    let args = export_args(dir);
    let summary = export_browser_history(&args).expect("export");
    assert_eq!(summary.url_count, 3);
    assert!(summary.backup_path.exists(), "history copy is retained");
    let range = summary.date_range.expect("date range");
    assert_eq!(range.earliest, "January 1, 2024");
    assert_eq!(range.latest, "March 1, 2024");
    assert_eq!(range.days, 60);

    let csv = fs::read_to_string(&args.csv).expect("csv");
    assert_eq!(csv.lines().next(), Some("Website"));
    assert_eq!(csv.lines().count(), 4);

    let output = dir.join("index.html");
    let viewer = RecordingViewer::default();
    let result = analyze_history_csv(&args.csv, &output, &viewer).expect("analyze");

    assert_eq!(
        result.ranked,
        vec![
            RankedEntry {
                rank: 1,
                domain: "github.com".to_string(),
                visits: 2,
            },
            RankedEntry {
                rank: 2,
                domain: "lichess.org".to_string(),
                visits: 1,
            },
        ]
    );
    assert_eq!(result.total_urls, 3);
    assert_eq!(result.unique_domains, 2);
    assert_eq!(viewer.opened.borrow().as_slice(), &[output.clone()]);

    let html = fs::read_to_string(&output).expect("report");
    let skills_at = html.find("<h2>Soft Skills</h2>").expect("skills section");
    let (jobs_html, skills_html) = html.split_at(skills_at);
    assert!(jobs_html.contains("<td>1</td>\n            <td>Open Source Contributor</td>\n            <td>2</td>"));
    assert!(jobs_html.contains("<td>2</td>\n            <td>Chess Player</td>\n            <td>1</td>"));
    assert!(skills_html.contains("<td>Open Source Collaboration</td>"));
    assert!(skills_html.contains("<td>Strategic Thinking</td>"));
}

#[test]
fn malformed_urls_rank_in_the_empty_bucket() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let csv = temp_dir.path().join("urls.csv");
    fs::write(&csv, "Website\nnot a url\nhttps://github.com/a\n").expect("write csv");

    let output = temp_dir.path().join("index.html");
    let result = analyze_history_csv(&csv, &output, &NoopViewer).expect("analyze");

    assert_eq!(result.ranked.len(), 2);
    assert_eq!(result.ranked[0].domain, "");
    assert_eq!(result.ranked[0].rank, 1);
    assert_eq!(result.ranked[1].domain, "github.com");

    let html = fs::read_to_string(&output).expect("report");
    assert!(html.contains("<td>No available</td>"));
}

#[test]
fn reports_are_reproducible() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let csv = temp_dir.path().join("urls.csv");
    fs::write(
        &csv,
        "Website\nhttps://www.youtube.com/1\nhttps://www.reddit.com/r\nhttps://www.youtube.com/2\nhttps://unknown.example/\n",
    )
    .expect("write csv");

    let first = temp_dir.path().join("first.html");
    let second = temp_dir.path().join("second.html");
    analyze_history_csv_with(&csv, &first, job_positions(), soft_skills(), &NoopViewer)
        .expect("first");
    analyze_history_csv_with(&csv, &second, job_positions(), soft_skills(), &NoopViewer)
        .expect("second");

    assert_eq!(
        fs::read(&first).expect("first report"),
        fs::read(&second).expect("second report")
    );
}

#[test]
fn missing_history_is_not_found_and_writes_nothing() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let args = export_args(temp_dir.path());

    let err = export_browser_history(&args).expect_err("missing history");
    let history_err = err.downcast_ref::<HistoryError>().expect("history error");
    assert!(history_err.is_not_found());
    assert!(!args.csv.exists());
    assert!(!args.backup.exists());
}

#[test]
fn missing_csv_is_not_found_and_writes_no_report() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let output = temp_dir.path().join("index.html");
    let viewer = RecordingViewer::default();

    let err = analyze_history_csv(&temp_dir.path().join("absent.csv"), &output, &viewer)
        .expect_err("missing csv");
    assert!(matches!(
        err.downcast_ref::<HistoryError>(),
        Some(HistoryError::SourceNotFound(_))
    ));
    assert!(!output.exists());
    assert!(viewer.opened.borrow().is_empty());
}

#[test]
fn history_without_urls_table_fails_before_csv() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let args = export_args(temp_dir.path());
    let conn = rusqlite::Connection::open(args.history.as_ref().expect("history")).expect("open");
    conn.execute_batch("CREATE TABLE meta (key TEXT, value TEXT);")
        .expect("schema");
    drop(conn);

    let err = export_browser_history(&args).expect_err("no urls table");
    assert!(matches!(
        err.downcast_ref::<HistoryError>(),
        Some(HistoryError::Sqlite(_))
    ));
    assert!(!args.csv.exists());
}

#[test]
fn multi_column_csv_ranks_column_by_column() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let csv = temp_dir.path().join("urls.csv");
    fs::write(
        &csv,
        "Website,Mirror\nhttps://x.com,https://y.com\nhttps://z.com,https://w.com\n",
    )
    .expect("write csv");

    let output = temp_dir.path().join("index.html");
    let result = analyze_history_csv(&csv, &output, &NoopViewer).expect("analyze");
    let domains: Vec<&str> = result.ranked.iter().map(|e| e.domain.as_str()).collect();
    assert_eq!(domains, vec!["x.com", "z.com", "y.com", "w.com"]);

    fs::write(&csv, "Website,Mirror\nhttps://x.com,https://y.com\nhttps://z.com\n")
        .expect("rewrite csv");
    let result = analyze_history_csv(&csv, &output, &NoopViewer).expect("analyze");
    assert_eq!(result.total_urls, 4);
    assert_eq!(result.unique_domains, 4);
}

#[test]
fn out_of_range_visit_time_still_exports() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let dir = temp_dir.path();
    build_history_db(
        &dir.join("History"),
        &["https://github.com/a"],
        &[JAN_1_2024, i64::MAX],
    );

    let args = export_args(dir);
    let summary = export_browser_history(&args).expect("export");
    assert_eq!(summary.url_count, 1);
    assert!(summary.date_range.is_none());
    assert!(args.csv.exists());
}
