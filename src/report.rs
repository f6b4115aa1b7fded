use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

use crate::error::Result;
use crate::labels::LabelTable;
use crate::stats::RankedEntry;

pub const DEFAULT_REPORT_PATH: &str = "index.html";

/// Something that can show a written report to the user.
pub trait Viewer {
    fn open(&self, path: &Path) -> std::io::Result<()>;
}

/// Opens the report with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> std::io::Result<()> {
        #[cfg(target_os = "windows")]
        {
            Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("open").arg(path).spawn()?;
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Command::new("xdg-open").arg(path).spawn()?;
        }

        Ok(())
    }
}

/// Headless viewer: leaves the report on disk and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn open(&self, _path: &Path) -> std::io::Result<()> {
        Ok(())
    }
}

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Job and Soft Skills Recommendations</title>
</head>
<body>
    <h1>Top 5 Recommended Job Positions and Soft Skills</h1>
"#;

const FOOTER: &str = "</body>\n</html>\n";

fn escape_html(text: &str) -> String {
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

fn render_section(
    html: &mut String,
    heading: &str,
    column: &str,
    ranked: &[RankedEntry],
    table: &LabelTable,
) {
    html.push_str(&format!(
        "\n    <h2>{heading}</h2>\n    <table>\n        <tr>\n            <th>Rank</th>\n            <th>{column}</th>\n            <th>Domain Visits</th>\n        </tr>\n"
    ));
    for entry in ranked {
        html.push_str(&format!(
            "        <tr>\n            <td>{}</td>\n            <td>{}</td>\n            <td>{}</td>\n        </tr>\n",
            entry.rank,
            escape_html(table.label_for(&entry.domain)),
            entry.visits
        ));
    }
    html.push_str("    </table>\n");
}

/// Renders the two ranked tables as a standalone HTML document. The output
/// depends only on its arguments.
pub fn render_report(ranked: &[RankedEntry], jobs: &LabelTable, skills: &LabelTable) -> String {
    let mut html = String::from(HEADER);
    render_section(&mut html, "Job Positions", "Job Position", ranked, jobs);
    render_section(&mut html, "Soft Skills", "Soft Skill", ranked, skills);
    html.push_str(FOOTER);
    html
}

pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    info!(action = "write", component = "report", path = ?path, bytes = html.len(), "HTML file created");
    Ok(())
}

/// Hands the written report to `viewer`. A viewer that fails to launch is
/// logged and otherwise ignored.
pub fn show_report(viewer: &dyn Viewer, path: &Path) {
    if let Err(e) = viewer.open(path) {
        warn!(action = "open", component = "report_viewer", path = ?path, error = %e, "Failed to open report");
    }
}
