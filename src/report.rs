//! Output for localecheck results.
//!
//! - Suspect reports: one pretty JSON file per locale with every flagged document
//! - Summary: the ranked folder summaries, as a file or on stdout
//! - Pretty: colored ranked table for the terminal

use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::Suspect;
use crate::error::{AuditError, Result};
use crate::locale;
use crate::score::{FolderSummary, RunSummary};

/// File name of the aggregate summary inside the destination directory.
pub const SUMMARY_FILE: &str = "summary.json";

// =============================================================================
// JSON files
// =============================================================================

/// Path of the suspect report for a declared locale.
pub fn suspect_report_path(destination: &Path, locale: &str) -> PathBuf {
    destination.join(format!("{}.json", locale::canonicalize(locale)))
}

/// Write the suspects of one locale to `<destination>/<locale>.json`.
pub fn write_suspects(destination: &Path, locale: &str, suspects: &[Suspect]) -> Result<PathBuf> {
    let path = suspect_report_path(destination, locale);
    let json = serde_json::to_string_pretty(suspects)?;
    fs::write(&path, json).map_err(|source| AuditError::Report {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write the ranked folder summaries as a JSON array.
pub fn write_summary_file(path: &Path, run: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(&run.folders)?;
    fs::write(path, json).map_err(|source| AuditError::Report {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the ranked folder summaries as JSON on stdout.
pub fn write_json(run: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(&run.folders)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Print the ranked table.
pub fn write_pretty(run: &RunSummary, dry_run: bool) {
    println!();
    print!("  ");
    print!("{}", "localecheck".cyan().bold());
    print!(" v{}", env!("CARGO_PKG_VERSION"));
    if dry_run {
        print!("  {}", "(dry run, nothing written)".dimmed());
    }
    println!();
    println!();

    if run.folders.is_empty() {
        println!("  {}", "No locale folders matched.".dimmed());
        println!();
        return;
    }

    println!("  {}", "Ordered by wrongs...".bold());
    println!();
    for folder in &run.folders {
        write_folder_line(folder);
    }
    println!();

    write_totals(run);
    println!();
}

fn write_folder_line(folder: &FolderSummary) {
    print!("  {:<10} ", folder.locale);

    if folder.is_empty() {
        print!("{}", "no documents to check".dimmed());
    } else {
        print!(
            "{} of {} (",
            thousands(folder.wrongs),
            thousands(folder.total())
        );
        write_colored_rate(folder.p);
        print!(") are wrong probably.");
    }

    if folder.skipped > 0 {
        print!(
            "  {}",
            format!("({} skipped)", thousands(folder.skipped)).dimmed()
        );
    }
    if let Some(name) = locale::language_name(&folder.locale) {
        print!("  {}", name.dimmed());
    }
    println!();
}

fn write_colored_rate(p: f64) {
    let text = format!("{:.1}%", p);
    match p {
        p if p <= 5.0 => print!("{}", text.green().bold()),
        p if p <= 15.0 => print!("{}", text.green()),
        p if p <= 30.0 => print!("{}", text.yellow()),
        p if p <= 50.0 => print!("{}", text.yellow().bold()),
        _ => print!("{}", text.red()),
    }
}

fn write_totals(run: &RunSummary) {
    print!("  {}", "In total: ".bold());
    print!(
        "{} of {} (",
        thousands(run.total_wrongs()),
        thousands(run.total_documents())
    );
    write_colored_rate(run.p());
    println!(") documents are wrong probably.");
    println!(
        "  {}",
        format!(
            "Took {:.1}s  ({:.1}s summed individually)",
            run.took,
            run.summed_took()
        )
        .dimmed()
    );
}

/// Format a count with comma thousands separators.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn suspect(slug: &str) -> Suspect {
        Suspect {
            folder: "/content/de".to_string(),
            locale: "de".to_string(),
            guessed: "en".to_string(),
            slug: slug.to_string(),
            metadata: serde_yaml::from_str(&format!("locale: de\nslug: {}\ntitle: T\n", slug))
                .unwrap(),
            leaf: Some(true),
        }
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_suspect_report_path_is_canonical() {
        let path = suspect_report_path(Path::new("/out"), "pt-br");
        assert_eq!(path, PathBuf::from("/out/pt-BR.json"));
    }

    #[test]
    fn test_write_suspects() {
        let temp = TempDir::new().unwrap();
        let path = write_suspects(temp.path(), "de", &[suspect("z")]).unwrap();
        assert!(path.ends_with("de.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = written.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry["slug"], "z");
        assert_eq!(entry["guessed"], "en");
        assert_eq!(entry["leaf"], true);
        assert_eq!(entry["metadata"]["title"], "T");
        assert_eq!(entry["folder"], "/content/de");
    }

    #[test]
    fn test_write_suspects_unwritable_destination() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = write_suspects(&missing, "de", &[suspect("z")]).unwrap_err();
        assert!(matches!(err, AuditError::Report { .. }));
    }

    #[test]
    fn test_write_summary_file() {
        let temp = TempDir::new().unwrap();
        let run = RunSummary::new(
            vec![
                FolderSummary::new("fr", 4, 6, 0.5),
                FolderSummary::new("de", 1, 9, 0.25),
            ],
            0.75,
        );
        let path = temp.path().join(SUMMARY_FILE);
        write_summary_file(&path, &run).unwrap();

        let written: Vec<FolderSummary> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].locale, "de");
        assert_eq!(written[0].p, 10.0);
        assert_eq!(written[1].locale, "fr");
    }
}
