//! Core types for detection results.

use serde::{Deserialize, Serialize};

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Language the guesser settled on (the disagreeing one when `wrong`).
    pub guessed: String,
    /// Whether the guess disagrees with the declared locale.
    pub wrong: bool,
}

impl DetectionResult {
    pub fn new(guessed: impl Into<String>, wrong: bool) -> Self {
        Self {
            guessed: guessed.into(),
            wrong,
        }
    }
}

/// A document flagged as probably not written in its declared language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suspect {
    pub folder: String,
    /// Canonical spelling of the declared locale.
    pub locale: String,
    pub guessed: String,
    pub slug: String,
    /// The document's metadata, as stored.
    pub metadata: serde_yaml::Value,
    /// Unknown until every slug in the folder has been seen.
    pub leaf: Option<bool>,
}
