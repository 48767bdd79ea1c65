//! Configuration schema for localecheck.
//!
//! Every field has a default, so an empty (or absent) config file yields the
//! stock audit. Command-line flags are applied on top with [`Config::merge_flags`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["localecheck.yaml", ".localecheck.yaml"];

/// Slug prefixes treated as archive/legacy content.
pub const DEFAULT_ARCHIVE_PREFIXES: &[&str] = &["archive", "mozilla", "mdn"];

/// Which half wins when both halves of a split document disagree with the
/// declared locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    #[default]
    FirstHalf,
    SecondHalf,
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Source locale folder that is never audited unless named explicitly.
    pub reference_locale: String,
    pub include_archive: bool,
    /// Compute and print, but never write report files.
    pub dry_run: bool,
    pub split_heuristic: bool,
    /// Documents with more normalized lines than this are split in two.
    pub split_threshold: usize,
    pub tie_break: TieBreak,
    /// Size of the folder worker pool.
    pub workers: usize,
    pub archive_prefixes: Vec<String>,
    /// Glob patterns over slugs to leave out of the audit (e.g. "Web/API/**").
    pub excluded_slugs: Vec<String>,
    /// CSS selectors removed on top of the built-in noise list.
    pub extra_noise_selectors: Vec<String>,
    pub strip_all_caps: bool,
    pub unescape_entities: bool,
    /// Documents whose cleaned text is shorter than this are skipped. 0 disables.
    pub min_text_chars: usize,
    pub body_file: String,
    pub metadata_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_locale: "en-us".to_string(),
            include_archive: false,
            dry_run: false,
            split_heuristic: true,
            split_threshold: 20,
            tie_break: TieBreak::FirstHalf,
            workers: 4,
            archive_prefixes: DEFAULT_ARCHIVE_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_slugs: Vec::new(),
            extra_noise_selectors: Vec::new(),
            strip_all_caps: true,
            unescape_entities: true,
            min_text_chars: 0,
            body_file: "index.html".to_string(),
            metadata_file: "index.yaml".to_string(),
        }
    }
}

/// Flags from the command line that override file values.
#[derive(Debug, Clone, Default)]
pub struct FlagOverrides {
    pub include_archive: bool,
    pub dry_run: bool,
    pub no_split: bool,
    pub workers: Option<usize>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        Self::parse_str(&content).map_err(|e| match e {
            AuditError::Config(msg) => AuditError::parse(path, msg),
            other => other,
        })
    }

    /// Parse a config from YAML text. An empty document yields the defaults.
    pub fn parse_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AuditError::Config(e.to_string()))
    }

    /// Look for a config file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Apply command-line flags. Flags only ever switch behavior on (or, for
    /// `no_split`, off); they never undo a file setting otherwise.
    pub fn merge_flags(mut self, flags: &FlagOverrides) -> Self {
        self.include_archive |= flags.include_archive;
        self.dry_run |= flags.dry_run;
        if flags.no_split {
            self.split_heuristic = false;
        }
        if let Some(workers) = flags.workers {
            self.workers = workers;
        }
        self
    }

    /// Whether a slug falls under one of the archive prefixes.
    pub fn is_archived(&self, slug: &str) -> bool {
        let slug = slug.to_lowercase();
        self.archive_prefixes
            .iter()
            .any(|prefix| slug.starts_with(&prefix.to_lowercase()))
    }

    /// Build a matcher for `excluded_slugs`, or `None` when the list is empty.
    pub fn excluded_slug_matcher(&self) -> Result<Option<globset::GlobSet>> {
        if self.excluded_slugs.is_empty() {
            return Ok(None);
        }
        let mut builder = globset::GlobSetBuilder::new();
        for pattern in &self.excluded_slugs {
            let glob = globset::GlobBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    AuditError::Config(format!(
                        "invalid excluded_slugs pattern {:?}: {}",
                        pattern, e
                    ))
                })?;
            builder.add(glob);
        }
        builder
            .build()
            .map(Some)
            .map_err(|e| AuditError::Config(e.to_string()))
    }
}

/// Validate a config before any folder is processed.
pub fn validate(config: &Config) -> Result<()> {
    if config.workers == 0 {
        return Err(AuditError::Config("workers must be at least 1".to_string()));
    }

    if config.split_threshold < 1 {
        return Err(AuditError::Config(
            "split_threshold must be at least 1".to_string(),
        ));
    }

    if config.body_file.is_empty() || config.metadata_file.is_empty() {
        return Err(AuditError::Config(
            "body_file and metadata_file must not be empty".to_string(),
        ));
    }

    if config.archive_prefixes.iter().any(|p| p.trim().is_empty()) {
        return Err(AuditError::Config(
            "archive_prefixes must not contain empty entries".to_string(),
        ));
    }

    for selector in &config.extra_noise_selectors {
        scraper::Selector::parse(selector).map_err(|e| {
            AuditError::Config(format!("invalid noise selector {:?}: {}", selector, e))
        })?;
    }

    config.excluded_slug_matcher()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
reference_locale: en-US
workers: 8
tie_break: second-half
archive_prefixes:
  - archive
extra_noise_selectors:
  - "div.notecard"
"#;
        let config = Config::parse_str(yaml).unwrap();
        assert_eq!(config.reference_locale, "en-US");
        assert_eq!(config.workers, 8);
        assert_eq!(config.tie_break, TieBreak::SecondHalf);
        assert_eq!(config.archive_prefixes, vec!["archive".to_string()]);
        // Unspecified fields keep their defaults
        assert!(config.split_heuristic);
        assert_eq!(config.split_threshold, 20);
        assert_eq!(config.body_file, "index.html");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse_str("   \n").unwrap();
        assert_eq!(config.workers, 4);
        assert_eq!(config.reference_locale, "en-us");
        assert!(!config.include_archive);
    }

    #[test]
    fn test_archive_prefix_case_insensitive() {
        let config = Config::default();
        assert!(config.is_archived("Archive/Old_Page"));
        assert!(config.is_archived("MDN/Contribute"));
        assert!(config.is_archived("mozilla/firefox"));
        assert!(!config.is_archived("Web/HTML"));
    }

    #[test]
    fn test_merge_flags() {
        let flags = FlagOverrides {
            include_archive: true,
            dry_run: true,
            no_split: true,
            workers: Some(2),
        };
        let config = Config::default().merge_flags(&flags);
        assert!(config.include_archive);
        assert!(config.dry_run);
        assert!(!config.split_heuristic);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            workers: 0,
            ..Default::default()
        };
        assert!(validate(&config).is_err());

        let config = Config {
            extra_noise_selectors: vec!["div[".to_string()],
            ..Default::default()
        };
        assert!(validate(&config).is_err());

        let config = Config {
            excluded_slugs: vec!["Web/[".to_string()],
            ..Default::default()
        };
        assert!(validate(&config).is_err());

        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_archive_prefix() {
        let config = Config::parse_str("archive_prefixes:\n  - archive\n  - \"\"\n").unwrap();
        // An empty prefix would match every slug
        assert!(config.is_archived("Web/HTML"));
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
        assert!(err.to_string().contains("archive_prefixes"));
    }

    #[test]
    fn test_excluded_slug_matcher() {
        let config = Config {
            excluded_slugs: vec!["web/api/**".to_string()],
            ..Default::default()
        };
        let matcher = config.excluded_slug_matcher().unwrap().unwrap();
        assert!(matcher.is_match("Web/API/Element"));
        assert!(!matcher.is_match("Web/HTML/Element"));
    }

    #[test]
    fn test_discover() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(Config::discover(temp.path()).is_none());
        std::fs::write(temp.path().join(".localecheck.yaml"), "workers: 2\n").unwrap();
        let found = Config::discover(temp.path()).unwrap();
        assert!(found.ends_with(".localecheck.yaml"));
        assert_eq!(Config::parse_file(&found).unwrap().workers, 2);
    }
}
