//! Per-document detection: cleaning, normalizing, guessing and deciding.

mod classify;
mod clean;
mod leaf;
mod mismatch;
mod normalize;
mod types;

pub use classify::{LanguageGuesser, WhatlangGuesser, UNKNOWN};
pub use clean::{Cleaner, EMPTY_SELECTORS, NOISE_SELECTORS};
pub use leaf::{is_leaf, LeafIndex};
pub use mismatch::{MismatchDetector, DEFAULT_SPLIT_THRESHOLD};
pub use normalize::Normalizer;
pub use types::{DetectionResult, Suspect};
