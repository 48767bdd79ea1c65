//! Audit runner that fans locale folders out over a worker pool.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::config::{self, Config};
use crate::corpus;
use crate::detect::{Cleaner, LanguageGuesser, WhatlangGuesser};
use crate::error::{AuditError, Result};
use crate::score::{FolderSummary, RunSummary};

use super::FolderProcessor;

/// Audits every selected locale folder under a content root.
pub struct Runner {
    config: Config,
    guesser: Box<dyn LanguageGuesser>,
    show_progress: bool,
}

impl Runner {
    /// Create a runner using the `whatlang` guesser.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            guesser: Box::new(WhatlangGuesser),
            show_progress: false,
        }
    }

    /// Replace the language guesser.
    pub fn guesser<G: LanguageGuesser + 'static>(mut self, guesser: G) -> Self {
        self.guesser = Box::new(guesser);
        self
    }

    /// Draw a progress bar on stderr while folders are processed.
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Audit the folders under `root`, writing suspect reports to `destination`.
    ///
    /// `locales` restricts the run to the named folders. The first folder that
    /// fails aborts the whole run.
    pub fn run(&self, root: &Path, destination: &Path, locales: &[String]) -> Result<RunSummary> {
        config::validate(&self.config)?;
        prepare_destination(destination, self.config.dry_run)?;

        let folders = corpus::locale_folders(root, locales, &self.config.reference_locale)?;
        let cleaner = Cleaner::with_extra_selectors(&self.config.extra_noise_selectors)?;
        let excluded = self.config.excluded_slug_matcher()?;
        let processor = FolderProcessor::new(
            &self.config,
            &cleaner,
            self.guesser.as_ref(),
            destination,
        )
        .excluded_slugs(excluded.as_ref());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .map_err(|e| AuditError::Config(format!("cannot start worker pool: {}", e)))?;

        info!(
            folders = folders.len(),
            workers = self.config.workers,
            dry_run = self.config.dry_run,
            "auditing locale folders"
        );

        let progress = self.progress_bar(folders.len());
        let started = Instant::now();

        // Each folder is independent; the collect is the only join point.
        let summaries: Result<Vec<FolderSummary>> = pool.install(|| {
            folders
                .par_iter()
                .map(|folder| {
                    let outcome = processor.process(folder);
                    progress.inc(1);
                    outcome.map(|o| o.summary)
                })
                .collect()
        });
        progress.finish_and_clear();

        Ok(RunSummary::new(summaries?, started.elapsed().as_secs_f64()))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let style =
            ProgressStyle::with_template("  {spinner} [{bar:30}] {pos}/{len} folders {elapsed}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> ");
        ProgressBar::new(len as u64).with_style(style)
    }
}

/// Make sure `destination` can receive reports.
///
/// An existing non-directory is always an error; a missing directory is
/// created unless this is a dry run.
pub fn prepare_destination(destination: &Path, dry_run: bool) -> Result<()> {
    if destination.exists() {
        if !destination.is_dir() {
            return Err(AuditError::Destination {
                path: destination.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }
        return Ok(());
    }

    if dry_run {
        return Ok(());
    }

    fs::create_dir_all(destination).map_err(|e| AuditError::Destination {
        path: destination.to_path_buf(),
        message: e.to_string(),
    })
}
