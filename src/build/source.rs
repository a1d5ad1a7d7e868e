use std::path::{Path, PathBuf};

use super::document::ContentItem;

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("input path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory entry in {path}: {source}")]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

// =============================================================================
// Input tree
// =============================================================================

/// Everything found under an [`InputTree`].
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    /// Every subdirectory relative to the root, including empty ones
    pub directories: Vec<PathBuf>,
    /// Every file, sorted by relative path
    pub items: Vec<ContentItem>,
}

/// The directory of source documents and assets.
#[derive(Debug, Clone)]
pub struct InputTree {
    /// Root of the tree on disk
    pub root: PathBuf,
    source_ext: String,
    output_ext: String,
}

impl InputTree {
    /// Validate that `root` is a directory.
    pub fn open(root: PathBuf, source_ext: &str, output_ext: &str) -> Result<Self, SourceError> {
        if !root.exists() {
            return Err(SourceError::PathNotFound(root));
        }
        if !root.is_dir() {
            return Err(SourceError::NotADirectory(root));
        }

        Ok(Self {
            root,
            source_ext: source_ext.to_string(),
            output_ext: output_ext.to_string(),
        })
    }

    /// Discover every directory and file in the tree, sorted by relative path.
    pub fn discover_content(&self) -> Result<SiteContent, SourceError> {
        let mut content = SiteContent::default();
        self.walk_directory(&self.root, &PathBuf::new(), &mut content)?;
        content.directories.sort();
        content
            .items
            .sort_by(|a, b| a.source_path().cmp(b.source_path()));
        Ok(content)
    }

    /// Recursively walk a directory and collect directories and content items.
    fn walk_directory(
        &self,
        dir: &Path,
        relative_path: &Path,
        content: &mut SiteContent,
    ) -> Result<(), SourceError> {
        let entries = std::fs::read_dir(dir).map_err(|e| SourceError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SourceError::ReadEntry {
                path: dir.to_path_buf(),
                source: e,
            })?;

            let path = entry.path();
            let item_relative_path = relative_path.join(entry.file_name());

            if path.is_dir() {
                content.directories.push(item_relative_path.clone());
                self.walk_directory(&path, &item_relative_path, content)?;
            } else if path.is_file() {
                content.items.push(ContentItem::classify(
                    item_relative_path,
                    &self.source_ext,
                    &self.output_ext,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_content() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("guides/deep")).unwrap();
        std::fs::write(root.join("index.md"), "# Home").unwrap();
        std::fs::write(root.join("guides/setup.md"), "# Setup").unwrap();
        std::fs::write(root.join("guides/deep/logo.png"), [0u8, 1, 2]).unwrap();
        std::fs::write(root.join(".nojekyll"), "").unwrap();

        let tree = InputTree::open(root.to_path_buf(), "md", "html").unwrap();
        let content = tree.discover_content().unwrap();

        assert_eq!(
            content.directories,
            [PathBuf::from("guides"), PathBuf::from("guides/deep")]
        );
        let paths: Vec<_> = content
            .items
            .iter()
            .map(|i| (i.source_path().to_path_buf(), i.is_document()))
            .collect();
        assert_eq!(
            paths,
            [
                (PathBuf::from(".nojekyll"), false),
                (PathBuf::from("guides/deep/logo.png"), false),
                (PathBuf::from("guides/setup.md"), true),
                (PathBuf::from("index.md"), true),
            ]
        );
    }

    #[test]
    fn test_discover_empty_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("empty/nested")).unwrap();

        let tree = InputTree::open(dir.path().to_path_buf(), "md", "html").unwrap();
        let content = tree.discover_content().unwrap();
        assert!(content.items.is_empty());
        assert_eq!(
            content.directories,
            [PathBuf::from("empty"), PathBuf::from("empty/nested")]
        );
    }

    #[test]
    fn test_open_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = InputTree::open(dir.path().join("files"), "md", "html");
        assert!(matches!(result, Err(SourceError::PathNotFound(_))));
    }

    #[test]
    fn test_open_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("files");
        std::fs::write(&file, "").unwrap();
        let result = InputTree::open(file, "md", "html");
        assert!(matches!(result, Err(SourceError::NotADirectory(_))));
    }
}
