//! Markup cleaning: drop the elements that carry no translatable prose.
//!
//! Code samples, compatibility tables, navigation widgets and status banners
//! are shared verbatim between locales, so leaving them in would pull every
//! page towards English. Second-level headings are removed too: a page where
//! only the headings got translated is not a translated page.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::error::{AuditError, Result};

/// Built-in noise selectors, removed in a single pass.
pub const NOISE_SELECTORS: &str = "pre,code,#Quick_Links,div.bc-data,div.hidden,\
    table.standard-table,li:empty,p:empty,div:empty,\
    #compat-desktop,#compat-mobile,table.compat-table,\
    div.blockIndicator.warning,span.inlineIndicator,\
    .overheadIndicator,.translationInProgress,\
    .blockIndicator.experimental,.prevnext";

/// Containers left empty by the earlier removals.
pub const EMPTY_SELECTORS: &str = "li:empty,p:empty,div:empty,dt:empty";

static NOISE: Lazy<Selector> = Lazy::new(|| Selector::parse(NOISE_SELECTORS).unwrap());
static HEADINGS: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static GLOSSARY_LIST: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".multiColumnList").unwrap());
static EMPTY: Lazy<Selector> = Lazy::new(|| Selector::parse(EMPTY_SELECTORS).unwrap());

/// Removes noise elements from document markup.
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    extra: Vec<Selector>,
}

impl Cleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cleaner that also removes the given selectors along with the built-in list.
    pub fn with_extra_selectors(selectors: &[String]) -> Result<Self> {
        let extra = selectors
            .iter()
            .map(|s| {
                Selector::parse(s).map_err(|e| {
                    AuditError::Config(format!("invalid noise selector {:?}: {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { extra })
    }

    /// Clean `markup` and return what is left of it as markup.
    ///
    /// The result is empty when nothing worth classifying remains.
    pub fn clean(&self, markup: &str, slug: &str) -> String {
        let mut doc = Html::parse_fragment(markup);

        remove_matching(&mut doc, &NOISE);
        for selector in &self.extra {
            remove_matching(&mut doc, selector);
        }
        remove_matching(&mut doc, &HEADINGS);

        if slug.to_lowercase().contains("glossary") {
            remove_matching(&mut doc, &GLOSSARY_LIST);
        }

        // Removing an empty child can empty its parent; sweep until stable.
        while remove_matching(&mut doc, &EMPTY) > 0 {}

        doc.root_element().inner_html().trim().to_string()
    }

    /// Number of elements in `markup` that cleaning would still remove.
    pub fn count_noise(&self, markup: &str, slug: &str) -> usize {
        let doc = Html::parse_fragment(markup);
        let root = doc.root_element();
        let mut count = root.select(&NOISE).count() + root.select(&HEADINGS).count();
        count += self
            .extra
            .iter()
            .map(|selector| root.select(selector).count())
            .sum::<usize>();
        if slug.to_lowercase().contains("glossary") {
            count += root.select(&GLOSSARY_LIST).count();
        }
        count + root.select(&EMPTY).count()
    }
}

/// Detach every element under the fragment root matching `selector`.
fn remove_matching(doc: &mut Html, selector: &Selector) -> usize {
    let ids: Vec<_> = doc
        .root_element()
        .select(selector)
        .map(|element| element.id())
        .collect();

    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }

    ids.len()
}
