//! Pipeline context for sharing state across stages.

use pulldown_cmark::Options;

use crate::build::links::LinkRewriter;
use crate::build::render::TemplateRegistry;

/// Shared context for pipeline stages.
///
/// Contains all resources and configuration needed by stages during
/// processing. Nothing in here changes while a document is processed.
pub struct PipelineContext<'a> {
    /// Loaded page templates
    pub templates: &'a TemplateRegistry,

    /// Compiled link rewriter (source extension → output extension)
    pub links: &'a LinkRewriter,

    /// Markdown parser options
    pub markdown_options: Options,

    /// Asset folder name passed to templates
    pub scripts_folder: &'a str,
}

impl<'a> PipelineContext<'a> {
    /// Create a new pipeline context.
    pub fn new(
        templates: &'a TemplateRegistry,
        links: &'a LinkRewriter,
        markdown_options: Options,
        scripts_folder: &'a str,
    ) -> Self {
        Self {
            templates,
            links,
            markdown_options,
            scripts_folder,
        }
    }
}
