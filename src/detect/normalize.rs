//! Turning cleaned markup into the lines handed to the language guesser.
//!
//! Markup is parsed rather than pattern-stripped: attribute values and
//! comments may contain `>`, and only text nodes may reach the guesser.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::Html;

lazy_static! {
    /// Acronyms and constants (HTML, CSS, NULL) read the same in every language.
    static ref ALL_CAPS: Regex = Regex::new(r"\b[A-Z]{2,}\b").unwrap();
}

/// Collapses markup into trimmed, non-trivial lines.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    pub strip_all_caps: bool,
    /// When off, text keeps the entity spelling the serializer gave it.
    pub unescape_entities: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            strip_all_caps: true,
            unescape_entities: true,
        }
    }
}

impl Normalizer {
    pub fn new(strip_all_caps: bool, unescape_entities: bool) -> Self {
        Self {
            strip_all_caps,
            unescape_entities,
        }
    }

    /// Keep the text nodes of `markup` and return its lines, in document order.
    pub fn normalize(&self, markup: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(markup);
        let mut text: String = fragment.root_element().text().collect();

        if self.strip_all_caps {
            text = ALL_CAPS.replace_all(&text, "").into_owned();
        }

        text = if self.unescape_entities {
            text.replace('\u{a0}', " ")
        } else {
            escape_text(&text)
        };

        text.lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > 1)
            .map(str::to_string)
            .collect()
    }
}

/// Re-escape decoded text the way the markup serializer writes text nodes.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}
