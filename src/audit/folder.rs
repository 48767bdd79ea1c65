//! Auditing one locale folder.

use globset::GlobSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::corpus::{self, Document};
use crate::detect::{Cleaner, LanguageGuesser, LeafIndex, MismatchDetector, Normalizer, Suspect};
use crate::error::Result;
use crate::locale;
use crate::report;
use crate::score::FolderSummary;

/// What a folder audit produced.
#[derive(Debug, Clone)]
pub struct FolderOutcome {
    pub summary: FolderSummary,
    /// Flagged documents, with leafness filled in.
    pub suspects: Vec<Suspect>,
    /// Where the suspect report was written, if it was.
    pub report: Option<PathBuf>,
}

/// How a single document was counted.
enum Verdict {
    Right,
    Wrong(Suspect),
    Skipped,
}

/// Runs clean → normalize → guess → decide over every document of a folder.
///
/// Holds no state between folders, so one processor can serve every worker.
pub struct FolderProcessor<'a> {
    config: &'a Config,
    cleaner: &'a Cleaner,
    guesser: &'a dyn LanguageGuesser,
    destination: &'a Path,
    excluded_slugs: Option<&'a GlobSet>,
    normalizer: Normalizer,
    detector: MismatchDetector,
}

impl<'a> FolderProcessor<'a> {
    pub fn new(
        config: &'a Config,
        cleaner: &'a Cleaner,
        guesser: &'a dyn LanguageGuesser,
        destination: &'a Path,
    ) -> Self {
        Self {
            config,
            cleaner,
            guesser,
            destination,
            excluded_slugs: None,
            normalizer: Normalizer::new(config.strip_all_caps, config.unescape_entities),
            detector: MismatchDetector::new()
                .split_heuristic(config.split_heuristic)
                .split_threshold(config.split_threshold)
                .tie_break(config.tie_break),
        }
    }

    /// Leave out documents whose slug matches `globs`.
    pub fn excluded_slugs(mut self, globs: Option<&'a GlobSet>) -> Self {
        self.excluded_slugs = globs;
        self
    }

    /// Audit `folder`. Unreadable or malformed documents abort the folder.
    pub fn process(&self, folder: &Path) -> Result<FolderOutcome> {
        let started = Instant::now();
        let folder_name = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let short_locale = locale::short_form(&folder_name);

        let documents =
            corpus::find_documents(folder, &self.config.body_file, &self.config.metadata_file)?;
        debug!(folder = %folder.display(), documents = documents.len(), "found documents");

        let mut wrongs = 0;
        let mut rights = 0;
        let mut skipped = 0;
        let mut all_slugs = Vec::with_capacity(documents.len());
        let mut suspects = Vec::new();

        for document in &documents {
            match self.check_document(folder, document, &mut all_slugs)? {
                Verdict::Right => rights += 1,
                Verdict::Wrong(suspect) => {
                    wrongs += 1;
                    suspects.push(suspect);
                }
                Verdict::Skipped => skipped += 1,
            }
        }

        let index = LeafIndex::new(all_slugs);
        for suspect in &mut suspects {
            suspect.leaf = Some(index.is_leaf(&suspect.slug));
        }

        let mut summary =
            FolderSummary::new(short_locale, wrongs, rights, started.elapsed().as_secs_f64());
        summary.skipped = skipped;

        if summary.is_empty() {
            warn!(
                folder = %folder.display(),
                skipped,
                "no documents left to check, reporting 0%"
            );
        }
        info!(
            locale = %summary.locale,
            wrongs,
            rights,
            skipped,
            took = summary.took,
            "{} of {} ({:.1}%) are wrong probably",
            wrongs,
            summary.total(),
            summary.p
        );

        let report = match suspects.first() {
            Some(first) if !self.config.dry_run => {
                let path = report::write_suspects(self.destination, &first.locale, &suspects)?;
                info!(path = %path.display(), suspects = suspects.len(), "wrote suspect report");
                Some(path)
            }
            _ => None,
        };

        Ok(FolderOutcome {
            summary,
            suspects,
            report,
        })
    }

    fn check_document(
        &self,
        folder: &Path,
        document: &Document,
        all_slugs: &mut Vec<String>,
    ) -> Result<Verdict> {
        let metadata = document.load_metadata()?;
        // Excluded documents still count as possible parents for leafness.
        all_slugs.push(metadata.slug.clone());

        if !self.config.include_archive && self.config.is_archived(&metadata.slug) {
            debug!(slug = %metadata.slug, "skipping archived document");
            return Ok(Verdict::Skipped);
        }

        if let Some(globs) = self.excluded_slugs {
            if globs.is_match(&metadata.slug) {
                debug!(slug = %metadata.slug, "skipping excluded document");
                return Ok(Verdict::Skipped);
            }
        }

        let body = document.read_body()?;
        let cleaned = self.cleaner.clean(&body, &metadata.slug);
        if cleaned.is_empty() {
            warn!(path = %document.body.display(), "no text left after cleaning");
            return Ok(Verdict::Skipped);
        }

        let lines = self.normalizer.normalize(&cleaned);
        if lines.is_empty() {
            warn!(path = %document.body.display(), "no text left after normalizing");
            return Ok(Verdict::Skipped);
        }

        if self.config.min_text_chars > 0 {
            let chars: usize = lines.iter().map(|l| l.chars().count()).sum();
            if chars < self.config.min_text_chars {
                debug!(slug = %metadata.slug, chars, "skipping short document");
                return Ok(Verdict::Skipped);
            }
        }

        let result = self.detector.detect(&lines, &metadata.locale, self.guesser);
        if !result.wrong {
            return Ok(Verdict::Right);
        }

        debug!(slug = %metadata.slug, guessed = %result.guessed, "suspect");
        Ok(Verdict::Wrong(Suspect {
            folder: folder.display().to_string(),
            locale: locale::canonicalize(&metadata.locale),
            guessed: result.guessed,
            slug: metadata.slug,
            metadata: metadata.raw,
            leaf: None,
        }))
    }
}
