//! Document types for pipeline processing.

use crate::build::front_matter::{Metadata, split_front_matter};

/// Body of every draft page.
pub const DRAFT_PLACEHOLDER: &str =
    "<h1>This page is a draft</h1><p>This content is currently unavailable.</p>";

/// A document being processed through the pipeline.
///
/// Holds mutable state that evolves through pipeline stages:
///
/// 1. Initially: `content` = markdown body, `toc` = empty
/// 2. After links/code/headings: `content` = transformed markdown,
///    `toc` = rendered table of contents
/// 3. After markdown: `content` = HTML fragment
/// 4. After template: `output_html` = final page HTML
///
/// Drafts start with the placeholder as `content` and only pass the
/// template stage.
#[derive(Debug)]
pub struct ProcessingDocument {
    /// Parsed front matter
    pub metadata: Metadata,

    /// Content being processed.
    pub content: String,

    /// Rendered table of contents.
    ///
    /// Empty until the headings stage populates it.
    pub toc: String,

    /// Final HTML output after template rendering.
    ///
    /// None until the template stage populates it.
    pub output_html: Option<String>,
}

impl ProcessingDocument {
    /// Split front matter off the raw text and prepare the body.
    pub fn parse(raw: &str) -> Self {
        let split = split_front_matter(raw);
        let metadata = Metadata::from_block(split.metadata);

        let content = if metadata.is_draft() {
            DRAFT_PLACEHOLDER.to_string()
        } else {
            split.body.to_string()
        };

        Self {
            metadata,
            content,
            toc: String::new(),
            output_html: None,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.metadata.is_draft()
    }

    pub fn title(&self) -> &str {
        self.metadata.title()
    }

    /// Name of the template this document asks for.
    pub fn template(&self) -> &str {
        self.metadata.template()
    }
}
