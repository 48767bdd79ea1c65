//! Leaf detection: does a slug have descendants in the same locale?
//!
//! A mismatch on a page with translated children is lower priority, since the
//! children usually carry the real signal. Leafness is a plain string-prefix
//! test, so "Web/API" is not a leaf when "Web/APIs" exists.

/// True iff no slug in `all_slugs` extends `slug`.
pub fn is_leaf(slug: &str, all_slugs: &[String]) -> bool {
    !all_slugs
        .iter()
        .any(|other| other.len() > slug.len() && other.starts_with(slug))
}

/// Sorted slug set for answering many leaf queries against one folder.
#[derive(Debug, Clone, Default)]
pub struct LeafIndex {
    sorted: Vec<String>,
}

impl LeafIndex {
    pub fn new(slugs: impl IntoIterator<Item = String>) -> Self {
        let mut sorted: Vec<String> = slugs.into_iter().collect();
        sorted.sort();
        sorted.dedup();
        Self { sorted }
    }

    /// Same answer as [`is_leaf`].
    pub fn is_leaf(&self, slug: &str) -> bool {
        // Every string with `slug` as a prefix sorts at or after `slug`, contiguously.
        let start = self.sorted.partition_point(|s| s.as_str() < slug);
        !self.sorted[start..]
            .iter()
            .take_while(|s| s.starts_with(slug))
            .any(|s| s.len() > slug.len())
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}
