//! Mismatch rates per folder and for the whole run.
//!
//! Folders are ranked ascending by the share of documents flagged as wrong.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Counts and timing for one locale folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderSummary {
    /// Short locale, e.g. "pt" for a "pt-br" folder.
    pub locale: String,
    pub wrongs: usize,
    /// Percentage of counted documents that are wrong.
    pub p: f64,
    pub rights: usize,
    /// Seconds spent on the folder.
    pub took: f64,
    /// Documents that counted as neither right nor wrong.
    #[serde(skip)]
    pub skipped: usize,
}

impl FolderSummary {
    pub fn new(locale: impl Into<String>, wrongs: usize, rights: usize, took: f64) -> Self {
        Self {
            locale: locale.into(),
            wrongs,
            p: percentage(wrongs, rights),
            rights,
            took,
            skipped: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.wrongs + self.rights
    }

    /// True when no document in the folder was counted, so `p` carries no signal.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Percentage of `wrongs` among all counted documents.
///
/// A folder without counted documents reports 0%.
pub fn percentage(wrongs: usize, rights: usize) -> f64 {
    let total = wrongs + rights;
    if total == 0 {
        return 0.0;
    }
    100.0 * wrongs as f64 / total as f64
}

/// Ascending by `p`, then by locale so equal rates still order deterministically.
pub fn compare(a: &FolderSummary, b: &FolderSummary) -> Ordering {
    a.p.total_cmp(&b.p).then_with(|| a.locale.cmp(&b.locale))
}

/// Sort summaries into reporting order.
pub fn rank(summaries: &mut [FolderSummary]) {
    summaries.sort_by(compare);
}

/// Ranked folder summaries plus run-wide totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub folders: Vec<FolderSummary>,
    /// Wall-clock seconds for the whole run.
    pub took: f64,
}

impl RunSummary {
    /// Build a run summary; folders may arrive in any order.
    pub fn new(mut folders: Vec<FolderSummary>, took: f64) -> Self {
        rank(&mut folders);
        Self { folders, took }
    }

    pub fn total_wrongs(&self) -> usize {
        self.folders.iter().map(|f| f.wrongs).sum()
    }

    pub fn total_rights(&self) -> usize {
        self.folders.iter().map(|f| f.rights).sum()
    }

    pub fn total_documents(&self) -> usize {
        self.total_wrongs() + self.total_rights()
    }

    /// Mismatch rate over every counted document of the run.
    pub fn p(&self) -> f64 {
        percentage(self.total_wrongs(), self.total_rights())
    }

    /// Folder timings added up; exceeds `took` when workers overlap.
    pub fn summed_took(&self) -> f64 {
        self.folders.iter().map(|f| f.took).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(locale: &str, p: f64) -> FolderSummary {
        FolderSummary {
            locale: locale.to_string(),
            wrongs: 0,
            p,
            rights: 0,
            took: 0.0,
            skipped: 0,
        }
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(3, 7), 30.0);
        assert_eq!(percentage(0, 5), 0.0);
        assert_eq!(percentage(5, 0), 100.0);
        assert!((percentage(1, 2) - 33.333).abs() < 0.001);
    }

    #[test]
    fn test_percentage_without_documents() {
        assert_eq!(percentage(0, 0), 0.0);
        let s = FolderSummary::new("de", 0, 0, 0.1);
        assert!(s.is_empty());
        assert_eq!(s.p, 0.0);
    }

    #[test]
    fn test_rank_ascending() {
        let run = RunSummary::new(
            vec![summary("fr", 40.0), summary("de", 10.0), summary("ja", 25.0)],
            1.0,
        );
        let ps: Vec<f64> = run.folders.iter().map(|f| f.p).collect();
        assert_eq!(ps, vec![10.0, 25.0, 40.0]);
    }

    #[test]
    fn test_rank_ties_by_locale() {
        let mut folders = vec![summary("ru", 5.0), summary("es", 5.0)];
        rank(&mut folders);
        assert_eq!(folders[0].locale, "es");
        assert_eq!(folders[1].locale, "ru");
    }

    #[test]
    fn test_totals() {
        let run = RunSummary::new(
            vec![
                FolderSummary::new("de", 3, 7, 1.5),
                FolderSummary::new("fr", 1, 9, 2.0),
            ],
            2.5,
        );
        assert_eq!(run.total_wrongs(), 4);
        assert_eq!(run.total_rights(), 16);
        assert_eq!(run.total_documents(), 20);
        assert_eq!(run.p(), 20.0);
        assert_eq!(run.summed_took(), 3.5);
    }

    #[test]
    fn test_json_fields() {
        let s = FolderSummary::new("de", 3, 7, 1.25);
        let value = serde_json::to_value(&s).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(value["p"], 30.0);
        assert_eq!(value["wrongs"], 3);
        assert!(value.get("skipped").is_none());
    }

    proptest! {
        #[test]
        fn rank_is_independent_of_arrival_order(
            mut ps in prop::collection::vec(0.0f64..100.0, 0..10),
            seed in any::<u64>(),
        ) {
            let folders: Vec<FolderSummary> = ps
                .iter()
                .enumerate()
                .map(|(i, p)| summary(&format!("l{}", i), *p))
                .collect();

            let mut shuffled = folders.clone();
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left((seed as usize) % len);
            }

            let a = RunSummary::new(folders, 0.0);
            let b = RunSummary::new(shuffled, 0.0);
            prop_assert_eq!(&a.folders, &b.folders);

            ps.sort_by(|x, y| x.total_cmp(y));
            let ranked: Vec<f64> = a.folders.iter().map(|f| f.p).collect();
            prop_assert_eq!(ranked, ps);
        }
    }
}
