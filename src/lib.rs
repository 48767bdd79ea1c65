//! Localecheck - documentation locale audit.
//!
//! Localecheck finds documentation pages whose written language does not
//! match their declared locale: stale copies of the source text that were
//! never actually translated. Each locale folder is walked, markup noise is
//! stripped from every document, the remaining text is run through a language
//! guesser, and documents whose guess disagrees with the declared locale are
//! reported as suspects.
//!
//! # Architecture
//!
//! - `corpus`: locale folder selection and document discovery
//! - `detect`: per-document cleaning, normalizing, guessing and leaf tests
//! - `audit`: per-folder processing and the parallel runner
//! - `config`: YAML config schema
//! - `locale`: locale spellings and language codes
//! - `report`: output formatting (text, JSON files)
//! - `score`: mismatch percentages and ranking
//!
//! # Swapping the Language Guesser
//!
//! Implement [`LanguageGuesser`] (closures `Fn(&str) -> String` already do)
//! and hand it to [`Runner::guesser`].

pub mod audit;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod detect;
pub mod error;
pub mod locale;
pub mod report;
pub mod score;

pub use audit::{FolderOutcome, FolderProcessor, Runner};
pub use config::{Config, TieBreak};
pub use corpus::{Document, DocumentMetadata};
pub use detect::{
    is_leaf, Cleaner, DetectionResult, LanguageGuesser, LeafIndex, MismatchDetector, Normalizer,
    Suspect, WhatlangGuesser,
};
pub use error::AuditError;
pub use score::{FolderSummary, RunSummary};
