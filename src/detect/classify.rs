//! Language guessing.
//!
//! The pipeline only depends on [`LanguageGuesser`]; the default
//! implementation wraps `whatlang`. Tests swap in closures.

use crate::locale;

/// Returned when the guesser cannot make up its mind.
pub const UNKNOWN: &str = "UNKNOWN";

/// Text in, ISO 639-1 language code out.
pub trait LanguageGuesser: Send + Sync {
    fn guess(&self, text: &str) -> String;
}

impl<F> LanguageGuesser for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn guess(&self, text: &str) -> String {
        self(text)
    }
}

/// Trigram-based guesser backed by `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangGuesser;

impl LanguageGuesser for WhatlangGuesser {
    fn guess(&self, text: &str) -> String {
        match whatlang::detect(text) {
            Some(info) => {
                let code = info.lang().code();
                locale::iso639_1(code).unwrap_or(code).to_string()
            }
            None => UNKNOWN.to_string(),
        }
    }
}
