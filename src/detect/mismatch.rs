//! Deciding whether a document is written in the wrong language.
//!
//! Short documents are guessed in one go. Long documents are cut in half and
//! each half is guessed separately: a page that is half translated and half
//! English often still comes out as the target language when guessed whole.

use crate::config::TieBreak;
use crate::locale;

use super::{DetectionResult, LanguageGuesser};

/// Default number of lines above which a document is split.
pub const DEFAULT_SPLIT_THRESHOLD: usize = 20;

/// Compares guessed languages with the declared locale.
#[derive(Debug, Clone, Copy)]
pub struct MismatchDetector {
    split_heuristic: bool,
    split_threshold: usize,
    tie_break: TieBreak,
}

impl Default for MismatchDetector {
    fn default() -> Self {
        Self {
            split_heuristic: true,
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            tie_break: TieBreak::FirstHalf,
        }
    }
}

impl MismatchDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable splitting long documents.
    pub fn split_heuristic(mut self, enabled: bool) -> Self {
        self.split_heuristic = enabled;
        self
    }

    pub fn split_threshold(mut self, threshold: usize) -> Self {
        self.split_threshold = threshold;
        self
    }

    /// Which half's guess to report when both halves disagree.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The two halves a document is guessed in, or `None` if it is guessed whole.
    pub fn split<'a>(&self, lines: &'a [String]) -> Option<(&'a [String], &'a [String])> {
        if !self.split_heuristic || lines.len() <= self.split_threshold {
            return None;
        }
        Some(lines.split_at(lines.len() / 2))
    }

    /// Classify `lines` against the declared locale.
    pub fn detect(
        &self,
        lines: &[String],
        declared: &str,
        guesser: &dyn LanguageGuesser,
    ) -> DetectionResult {
        let expected = locale::short_form(declared);

        let Some((first, second)) = self.split(lines) else {
            let guessed = guesser.guess(&lines.join("\n"));
            let wrong = !locale::same_language(&guessed, &expected);
            return DetectionResult::new(guessed, wrong);
        };

        let first_guess = guesser.guess(&first.join("\n"));
        let second_guess = guesser.guess(&second.join("\n"));
        let first_wrong = !locale::same_language(&first_guess, &expected);
        let second_wrong = !locale::same_language(&second_guess, &expected);

        match (first_wrong, second_wrong) {
            (false, false) => DetectionResult::new(first_guess, false),
            (true, false) => DetectionResult::new(first_guess, true),
            (false, true) => DetectionResult::new(second_guess, true),
            (true, true) => match self.tie_break {
                TieBreak::FirstHalf => DetectionResult::new(first_guess, true),
                TieBreak::SecondHalf => DetectionResult::new(second_guess, true),
            },
        }
    }
}
