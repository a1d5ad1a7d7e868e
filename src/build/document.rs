use std::path::{Path, PathBuf};

use super::paths::output_relative_path;

// =============================================================================
// Content items (documents and static files)
// =============================================================================

/// A file discovered in the input tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    /// A markdown document that will be rendered to HTML
    Document(Document),
    /// Any other file, copied byte-for-byte
    Static(StaticFile),
}

impl ContentItem {
    /// Classify a path relative to the input root.
    pub fn classify(relative_path: PathBuf, source_ext: &str, output_ext: &str) -> Self {
        if has_extension(&relative_path, source_ext) {
            let output_path = output_relative_path(&relative_path, output_ext);
            ContentItem::Document(Document {
                source_path: relative_path,
                output_path,
            })
        } else {
            ContentItem::Static(StaticFile {
                output_path: relative_path.clone(),
                source_path: relative_path,
            })
        }
    }

    /// Get the path relative to the input root.
    pub fn source_path(&self) -> &Path {
        match self {
            ContentItem::Document(doc) => &doc.source_path,
            ContentItem::Static(file) => &file.source_path,
        }
    }

    /// Get the path relative to the output root.
    pub fn output_path(&self) -> &Path {
        match self {
            ContentItem::Document(doc) => &doc.output_path,
            ContentItem::Static(file) => &file.output_path,
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self, ContentItem::Document(_))
    }
}

/// A markdown document (e.g. `guides/intro.md` → `guides/intro.html`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

/// A static file (image, CSS, JS, etc.) that gets copied to output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub source_path: PathBuf,
    pub output_path: PathBuf,
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
