use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::history_csv::DEFAULT_CSV_PATH;
use crate::report::DEFAULT_REPORT_PATH;
use crate::sqlite::{DEFAULT_BACKUP_PATH, DEFAULT_BROWSER};

#[derive(Parser, Debug)]
#[command(
    name = "skillscope",
    about = "Suggest job positions and soft skills from your most visited domains",
    version,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy the browser history and export its URLs to CSV
    Export(ExportArgs),
    /// Rank domains from a URL CSV and write the HTML report
    Report {
        /// URL CSV produced by `export`
        #[arg(long, default_value = DEFAULT_CSV_PATH)]
        csv: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Export and report in one go (default)
    Run {
        #[command(flatten)]
        export: ExportArgs,

        #[command(flatten)]
        report: ReportArgs,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ExportArgs {
    /// Browser to read history from
    #[arg(short, long, default_value = DEFAULT_BROWSER)]
    pub browser: String,

    /// Explicit path to the History database instead of the profile default
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Where the copy of the History database is kept
    #[arg(long, default_value = DEFAULT_BACKUP_PATH)]
    pub backup: PathBuf,

    /// Output path for the URL CSV
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    pub csv: PathBuf,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    /// Output path for the HTML report
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Do not open the report in the default viewer
    #[arg(long)]
    pub no_open: bool,

    /// Redact domain names in the terminal summary
    #[arg(long)]
    pub redact: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            browser: DEFAULT_BROWSER.to_string(),
            history: None,
            backup: PathBuf::from(DEFAULT_BACKUP_PATH),
            csv: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            no_open: false,
            redact: false,
        }
    }
}

impl Args {
    /// The subcommand to execute, falling back to a full run with defaults.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Run {
            export: ExportArgs::default(),
            report: ReportArgs::default(),
        })
    }
}
