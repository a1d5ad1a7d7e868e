use std::path::{Path, PathBuf};

use crate::config::{ErrorPolicy, RootConfig};

use super::document::ContentItem;
use super::links::LinkRewriter;
use super::markdown::{MarkdownError, markdown_options};
use super::paths::resolve_path;
use super::pipeline::{Pipeline, PipelineContext, PipelineError};
use super::render::{RenderError, TemplateRegistry};
use super::source::{InputTree, SourceError};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("markdown error: {0}")]
    Markdown(#[from] MarkdownError),

    #[error("invalid link extension: {0}")]
    LinkPattern(#[from] regex::Error),

    #[error("output directory {output} would delete input directory {input}")]
    OutputContainsInput { output: PathBuf, input: PathBuf },

    #[error("failed to reset output directory {path}: {source}")]
    ResetOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render {path}: {source}")]
    Pipeline {
        path: PathBuf,
        source: PipelineError,
    },
}

#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    pub documents: usize,
    pub static_files: usize,
    /// Files that failed and were skipped under `on_error: skip`
    pub skipped: usize,
}

pub struct Builder {
    config: RootConfig,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
    pipeline: Pipeline,
}

impl Builder {
    pub fn new(config: RootConfig, base_path: PathBuf) -> Self {
        Self {
            config,
            base_path,
            pipeline: Pipeline::default_pipeline(),
        }
    }

    pub fn build(&self) -> Result<BuildResult, BuildError> {
        // Build steps:
        // 1. Open the input tree and load templates (fail before touching output)
        // 2. Reset the output directory
        // 3. Discover content and mirror the directory structure
        // 4. Render or copy each item, one at a time

        let input_dir = resolve_path(&self.base_path, &self.config.site.input);
        let output_dir = self.output_dir();
        let build_config = &self.config.build;

        let tree = InputTree::open(
            input_dir.clone(),
            &build_config.source_extension,
            &build_config.output_extension,
        )?;

        let templates_dir = resolve_path(&self.base_path, &self.config.site.templates);
        let templates = TemplateRegistry::load(&templates_dir, &self.config.site.default_template)?;
        log::info!(
            "Loaded {} template(s) from {}",
            templates.template_names().len(),
            templates_dir.display()
        );

        let links = LinkRewriter::new(
            &build_config.source_extension,
            &build_config.output_extension,
        )?;
        let options = markdown_options(&self.config.markdown)?;
        let ctx = PipelineContext::new(
            &templates,
            &links,
            options,
            &self.config.site.scripts_folder,
        );

        reset_output_dir(&output_dir, &input_dir)?;

        let content = tree.discover_content()?;
        for dir in &content.directories {
            let path = output_dir.join(dir);
            std::fs::create_dir_all(&path).map_err(|e| BuildError::Write { path, source: e })?;
        }

        let items = content.items;
        let doc_count = items.iter().filter(|item| item.is_document()).count();
        let static_count = items.len() - doc_count;
        log::info!(
            "Found {} document(s) and {} static file(s) in {}",
            doc_count,
            static_count,
            input_dir.display()
        );

        let mut skipped = 0;
        for item in &items {
            log::debug!("Processing {}", item.source_path().display());
            if let Err(e) = self.write_item(item, &tree.root, &output_dir, &ctx) {
                match build_config.on_error {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Skip => {
                        log::error!("Skipping {}: {}", item.source_path().display(), e);
                        skipped += 1;
                    }
                }
            }
        }

        log::info!(
            "Wrote {} file(s) to {}",
            items.len() - skipped,
            output_dir.display()
        );

        Ok(BuildResult {
            output_dir,
            documents: doc_count,
            static_files: static_count,
            skipped,
        })
    }

    /// Render or copy a single content item into the output directory.
    fn write_item(
        &self,
        item: &ContentItem,
        input_dir: &Path,
        output_dir: &Path,
        ctx: &PipelineContext,
    ) -> Result<(), BuildError> {
        let input_path = input_dir.join(item.source_path());
        let output_path = output_dir.join(item.output_path());

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BuildError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        match item {
            ContentItem::Document(_) => {
                let raw_content =
                    std::fs::read_to_string(&input_path).map_err(|e| BuildError::Read {
                        path: input_path.clone(),
                        source: e,
                    })?;

                let html = self
                    .pipeline
                    .render_page(&raw_content, ctx)
                    .map_err(|e| BuildError::Pipeline {
                        path: input_path.clone(),
                        source: e,
                    })?;

                std::fs::write(&output_path, html).map_err(|e| BuildError::Write {
                    path: output_path.clone(),
                    source: e,
                })?;
            }
            ContentItem::Static(_) => {
                std::fs::copy(&input_path, &output_path).map_err(|e| BuildError::Copy {
                    from: input_path.clone(),
                    to: output_path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(())
    }

    /// Get the output directory path, resolved against base_path.
    pub fn output_dir(&self) -> PathBuf {
        resolve_path(&self.base_path, &self.config.site.output)
    }
}

/// Delete and recreate the output directory. Completes before any page is
/// written.
fn reset_output_dir(output_dir: &Path, input_dir: &Path) -> Result<(), BuildError> {
    let reset_error = |e: std::io::Error| BuildError::ResetOutput {
        path: output_dir.to_path_buf(),
        source: e,
    };

    if output_dir.exists() {
        let output = output_dir.canonicalize().map_err(reset_error)?;
        let input = input_dir.canonicalize().map_err(reset_error)?;
        if input.starts_with(&output) {
            return Err(BuildError::OutputContainsInput { output, input });
        }

        std::fs::remove_dir_all(output_dir).map_err(reset_error)?;
    }

    std::fs::create_dir_all(output_dir).map_err(reset_error)
}
