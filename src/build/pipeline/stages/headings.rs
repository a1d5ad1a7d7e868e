//! Heading anchor and table of contents stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::toc::transform_headings;

/// Stage that rewrites headings with `heading-N` ids.
///
/// After this stage, `doc.toc` holds the rendered table of contents.
pub struct HeadingStage;

impl Stage for HeadingStage {
    fn name(&self) -> &'static str {
        "headings"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let output = transform_headings(&doc.content);
        log::debug!("Anchored {} heading(s)", output.entries.len());
        doc.content = output.body;
        doc.toc = output.toc_html;
        Ok(())
    }
}
