use anyhow::Result;
use clap::Parser;
use tracing::error;

use skillscope::args::{Command, ExportArgs, ReportArgs};
use skillscope::browser::{
    analyze_history_csv, export_browser_history, print_analysis_results, print_export_summary,
};
use skillscope::labels::{job_positions, soft_skills};
use skillscope::report::{NoopViewer, SystemViewer, Viewer};
use skillscope::utils::{setup_logging, validate_args};
use skillscope::Args;

fn run_export(export: &ExportArgs) -> Result<()> {
    let summary = export_browser_history(export)?;
    print_export_summary(&summary);
    Ok(())
}

fn run_report(csv: &std::path::Path, report: &ReportArgs) -> Result<()> {
    let viewer: &dyn Viewer = if report.no_open {
        &NoopViewer
    } else {
        &SystemViewer
    };
    let result = analyze_history_csv(csv, &report.output, viewer)?;
    print_analysis_results(&result, job_positions(), soft_skills(), report.redact);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    let outcome = match args.command() {
        Command::Export(export) => run_export(&export),
        Command::Report { csv, report } => run_report(&csv, &report),
        Command::Run { export, report } => {
            run_export(&export).and_then(|_| run_report(&export.csv, &report))
        }
    };

    if let Err(e) = outcome {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
