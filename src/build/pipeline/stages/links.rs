//! Link rewriting stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that points intra-site links at the rendered output files.
///
/// Runs first, so link syntax inside code blocks and headings is rewritten
/// as well.
pub struct LinkStage;

impl Stage for LinkStage {
    fn name(&self) -> &'static str {
        "links"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.content = ctx.links.rewrite(&doc.content);
        Ok(())
    }
}
