//! Corpus discovery: locale folders under a content root, and the document
//! units inside each folder.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{AuditError, Result};

/// One document: a markup body and its sibling metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub body: PathBuf,
    pub metadata: PathBuf,
    /// Locale folder the document was found under.
    pub folder: PathBuf,
}

impl Document {
    pub fn read_body(&self) -> Result<String> {
        fs::read_to_string(&self.body).map_err(|e| AuditError::io(&self.body, e))
    }

    pub fn load_metadata(&self) -> Result<DocumentMetadata> {
        DocumentMetadata::load(&self.metadata)
    }
}

/// Parsed document metadata. `raw` keeps the whole mapping for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetadata {
    pub locale: String,
    pub slug: String,
    pub raw: serde_yaml::Value,
}

impl DocumentMetadata {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse metadata YAML. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AuditError::parse(path, e))?;

        let locale = scalar_field(&raw, "locale")
            .ok_or_else(|| AuditError::parse(path, "missing `locale`"))?;
        let slug =
            scalar_field(&raw, "slug").ok_or_else(|| AuditError::parse(path, "missing `slug`"))?;

        Ok(Self { locale, slug, raw })
    }
}

fn scalar_field(value: &serde_yaml::Value, key: &str) -> Option<String> {
    match value.get(key)? {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Locale folders directly under `root`, sorted by name.
///
/// With an empty `locales` list every folder except `reference_locale`
/// qualifies; otherwise only the named ones do. Names compare case-insensitively.
pub fn locale_folders(
    root: &Path,
    locales: &[String],
    reference_locale: &str,
) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AuditError::NotADirectory(root.to_path_buf()));
    }

    let wanted: Vec<String> = locales.iter().map(|l| l.to_lowercase()).collect();
    let reference = reference_locale.to_lowercase();

    let mut folders = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| AuditError::io(root, e))? {
        let entry = entry.map_err(|e| AuditError::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_lowercase();
        let selected = if wanted.is_empty() {
            name != reference
        } else {
            wanted.contains(&name)
        };
        if selected {
            folders.push(path);
        }
    }

    folders.sort();
    Ok(folders)
}

/// Every document unit under `folder`, at any depth.
///
/// Directory entries are visited in file-name order, so the result is stable
/// across runs.
pub fn find_documents(
    folder: &Path,
    body_file: &str,
    metadata_file: &str,
) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories
            !(e.depth() > 0
                && e.file_type().is_dir()
                && e.file_name().to_string_lossy().starts_with('.'))
        })
    {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| folder.to_path_buf());
            AuditError::io(path, e.into())
        })?;

        if !entry.file_type().is_file() || entry.file_name() != body_file {
            continue;
        }

        let body = entry.path().to_path_buf();
        let metadata = body.with_file_name(metadata_file);
        if metadata.is_file() {
            documents.push(Document {
                body,
                metadata,
                folder: folder.to_path_buf(),
            });
        }
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_locale_folders_excludes_reference() {
        let temp = TempDir::new().unwrap();
        for name in ["en-us", "de", "fr", "pt-br"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        fs::write(temp.path().join("README.md"), "not a folder").unwrap();

        let folders = locale_folders(temp.path(), &[], "en-US").unwrap();
        let names: Vec<_> = folders
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["de", "fr", "pt-br"]);
    }

    #[test]
    fn test_locale_folders_explicit_list() {
        let temp = TempDir::new().unwrap();
        for name in ["en-us", "de", "fr"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let wanted = ["FR".to_string(), "en-us".to_string()];
        let folders = locale_folders(temp.path(), &wanted, "en-us").unwrap();
        assert_eq!(folders.len(), 2);
        assert!(folders[0].ends_with("en-us"));
        assert!(folders[1].ends_with("fr"));
    }

    #[test]
    fn test_locale_folders_root_must_be_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            locale_folders(&file, &[], "en-us"),
            Err(AuditError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_find_documents_requires_sibling_metadata() {
        let temp = TempDir::new().unwrap();
        let de = temp.path().join("de");
        write(&de.join("web/index.html"), "<p>a</p>");
        write(&de.join("web/index.yaml"), "locale: de\nslug: Web\n");
        write(&de.join("web/api/index.html"), "<p>b</p>");
        write(&de.join("web/api/index.yaml"), "locale: de\nslug: Web/API\n");
        write(&de.join("orphan/index.html"), "<p>c</p>");
        write(&de.join(".git/index.html"), "<p>d</p>");
        write(&de.join(".git/index.yaml"), "locale: de\nslug: hidden\n");

        let docs = find_documents(&de, "index.html", "index.yaml").unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs[0].body.ends_with("web/api/index.html"));
        assert!(docs[1].body.ends_with("web/index.html"));
        assert!(docs.iter().all(|d| d.folder == de));
        assert!(docs.iter().all(|d| d.metadata.ends_with("index.yaml")));
    }

    #[test]
    fn test_metadata_parse() {
        let yaml = "title: Element\nslug: Web/API/Element\nlocale: pt-BR\ntags:\n  - API\n";
        let meta = DocumentMetadata::parse(yaml, Path::new("index.yaml")).unwrap();
        assert_eq!(meta.locale, "pt-BR");
        assert_eq!(meta.slug, "Web/API/Element");
        assert_eq!(meta.raw.get("title").and_then(|v| v.as_str()), Some("Element"));
    }

    #[test]
    fn test_metadata_missing_fields() {
        let err =
            DocumentMetadata::parse("title: x\nlocale: de\n", Path::new("a.yaml")).unwrap_err();
        assert!(matches!(err, AuditError::Parse { .. }));
        assert!(err.to_string().contains("slug"));

        let err = DocumentMetadata::parse("locale: [unclosed", Path::new("b.yaml")).unwrap_err();
        assert!(matches!(err, AuditError::Parse { .. }));
    }

    #[test]
    fn test_metadata_missing_file() {
        let err = DocumentMetadata::load(Path::new("/nonexistent/index.yaml")).unwrap_err();
        assert!(matches!(err, AuditError::Io { .. }));
    }
}
