//! Command-line interface for localecheck.

use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::audit::Runner;
use crate::config::{self, Config, FlagOverrides};
use crate::report;
use crate::score::RunSummary;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Documentation locale audit - find pages not written in their declared language.
///
/// Walks every locale folder under the content root, strips markup noise from
/// each document, guesses the language of what is left and reports documents
/// whose guess disagrees with the declared locale.
#[derive(Parser, Debug)]
#[command(name = "localecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content root holding one folder per locale
    pub content_root: PathBuf,

    /// Directory the suspect reports are written to
    pub destination: PathBuf,

    /// Only audit these locale folders (default: all but the reference locale)
    pub locales: Vec<String>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Include archive/legacy documents (slugs starting with archive, mozilla, mdn)
    #[arg(long)]
    pub include_archive: bool,

    /// Compute and print results without writing any report files
    #[arg(long)]
    pub dry_run: bool,

    /// Guess long documents in one pass instead of per half
    #[arg(long)]
    pub no_split: bool,

    /// Also write the ranked summary to summary.json in the destination
    #[arg(long)]
    pub summary: bool,

    /// Number of folders processed in parallel
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Highest acceptable mismatch percentage for any folder (exit non-zero if exceeded)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

impl Cli {
    fn flags(&self) -> FlagOverrides {
        FlagOverrides {
            include_archive: self.include_archive,
            dry_run: self.dry_run,
            no_split: self.no_split,
            workers: self.workers,
        }
    }
}

/// Load the config file named on the command line, or the discovered one.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = match &cli.config {
        Some(p) => Some(p.clone()),
        None => Config::discover(Path::new(".")),
    };

    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::parse_file(&path)?
        }
        None => Config::default(),
    };

    Ok(config.merge_flags(&cli.flags()))
}

/// Run the audit.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    // Validate format
    if cli.format != "pretty" && cli.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match load_config(cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: {}", e);
        return Ok(EXIT_ERROR);
    }

    let dry_run = config.dry_run;
    let runner = Runner::new(config).show_progress(std::io::stderr().is_terminal());
    let run = runner.run(&cli.content_root, &cli.destination, &cli.locales)?;

    match cli.format.as_str() {
        "json" => report::write_json(&run)?,
        _ => report::write_pretty(&run, dry_run),
    }

    if cli.summary && !dry_run {
        let path = cli.destination.join(report::SUMMARY_FILE);
        report::write_summary_file(&path, &run)?;
        info!(path = %path.display(), "wrote summary");
    }

    Ok(exit_code(&run, cli.threshold))
}

/// `EXIT_FAILED` when any folder's mismatch rate is above `threshold`.
fn exit_code(run: &RunSummary, threshold: Option<f64>) -> i32 {
    match threshold {
        Some(limit) if run.folders.iter().any(|f| f.p > limit) => EXIT_FAILED,
        _ => EXIT_SUCCESS,
    }
}
