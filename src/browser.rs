use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::args::ExportArgs;
use crate::history_csv;
use crate::labels::{self, LabelTable};
use crate::report::{self, Viewer};
use crate::sqlite;
use crate::stats::{AnalysisResult, DomainCounts, ExportSummary, TOP_DOMAINS};
use crate::utils::{format_number, redact_domain};

/// Stage one: copy the browser's history store and export its distinct URLs
/// to CSV. Nothing is written unless the whole read succeeds.
pub fn export_browser_history(args: &ExportArgs) -> Result<ExportSummary> {
    let start_time = Instant::now();
    info!(action = "start", component = "export", browser = %args.browser, "Starting history export");

    let history_path = match &args.history {
        Some(path) => path.clone(),
        None => sqlite::get_browser_history_path(&args.browser)?,
    };

    let sqlite::HistorySnapshot {
        backup_path,
        urls,
        date_range,
    } = sqlite::read_history(&history_path, &args.backup)
        .with_context(|| format!("Failed to read history database {:?}", history_path))?;

    history_csv::write_urls_csv(&args.csv, &urls)
        .with_context(|| format!("Failed to write {:?}", args.csv))?;

    info!(
        action = "complete",
        component = "export",
        url_count = urls.len(),
        retained_backup = ?backup_path,
        duration_ms = start_time.elapsed().as_millis(),
        "History export completed"
    );

    Ok(ExportSummary {
        history_path,
        backup_path,
        csv_path: args.csv.clone(),
        url_count: urls.len(),
        date_range,
    })
}

/// Stages two and three with the built-in label tables.
pub fn analyze_history_csv(
    csv_path: &Path,
    output_path: &Path,
    viewer: &dyn Viewer,
) -> Result<AnalysisResult> {
    analyze_history_csv_with(
        csv_path,
        output_path,
        labels::job_positions(),
        labels::soft_skills(),
        viewer,
    )
}

/// Stages two and three: rank the domains in a URL CSV, render the report to
/// `output_path` and hand it to `viewer`.
pub fn analyze_history_csv_with(
    csv_path: &Path,
    output_path: &Path,
    jobs: &LabelTable,
    skills: &LabelTable,
    viewer: &dyn Viewer,
) -> Result<AnalysisResult> {
    let start_time = Instant::now();
    info!(action = "start", component = "analysis", csv = ?csv_path, "Starting domain analysis");

    let urls = history_csv::read_urls_csv(csv_path)
        .with_context(|| format!("Failed to read {:?}", csv_path))?;

    let counts = DomainCounts::from_urls(&urls);
    let ranked = counts.ranked(TOP_DOMAINS);
    info!(
        action = "rank",
        component = "analysis",
        total_urls = counts.total(),
        unique_domains = counts.unique(),
        ranked = ranked.len(),
        "Ranked domains"
    );

    let html = report::render_report(&ranked, jobs, skills);
    report::write_report(output_path, &html)
        .with_context(|| format!("Failed to write report {:?}", output_path))?;
    report::show_report(viewer, output_path);

    info!(
        action = "complete",
        component = "analysis",
        duration_ms = start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        total_urls: counts.total(),
        unique_domains: counts.unique(),
        ranked,
        report_path: output_path.to_path_buf(),
    })
}

pub fn print_export_summary(summary: &ExportSummary) {
    println!("\n--- History Export ---");
    if let Some(range) = &summary.date_range {
        if range.days > 0 {
            println!(
                "Date range: {} to {} ({} days)",
                range.earliest,
                range.latest,
                format_number(range.days)
            );
        } else {
            println!("Date range: {} to {}", range.earliest, range.latest);
        }
    }
    println!("URLs exported: {}", format_number(summary.url_count));
    println!("CSV file: {}", summary.csv_path.display());
    println!("History copy kept at: {}", summary.backup_path.display());
}

/// Terminal summary of an analysis. Labels come from the same tables the
/// report was rendered with, so the terminal and the HTML agree.
pub fn analysis_summary(
    result: &AnalysisResult,
    jobs: &LabelTable,
    skills: &LabelTable,
    redact: bool,
) -> String {
    let mut out = String::new();
    out.push_str("\n--- Domain Analysis ---\n");
    out.push_str(&format!("URLs analyzed: {}\n", format_number(result.total_urls)));
    out.push_str(&format!(
        "Unique domains found: {}\n",
        format_number(result.unique_domains)
    ));

    out.push_str(&format!(
        "\nTop {} most visited domains:\n",
        result.ranked.len()
    ));
    for entry in &result.ranked {
        let display_domain = if entry.domain.is_empty() {
            "(no host)".to_string()
        } else if redact {
            redact_domain(&entry.domain)
        } else {
            entry.domain.clone()
        };
        out.push_str(&format!(
            "{}. {}: {} visits ({} / {})\n",
            entry.rank,
            display_domain,
            format_number(entry.visits),
            jobs.label_for(&entry.domain),
            skills.label_for(&entry.domain)
        ));
    }

    out.push_str(&format!(
        "\nReport written to {}\n",
        result.report_path.display()
    ));
    out
}

pub fn print_analysis_results(
    result: &AnalysisResult,
    jobs: &LabelTable,
    skills: &LabelTable,
    redact: bool,
) {
    print!("{}", analysis_summary(result, jobs, skills, redact));
}
