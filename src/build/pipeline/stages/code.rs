//! Code block escaping stage.

use crate::build::code::escape_code_blocks;
use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};

/// Stage that replaces fenced code blocks with escaped preformatted HTML.
pub struct CodeBlockStage;

impl Stage for CodeBlockStage {
    fn name(&self) -> &'static str {
        "code"
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        _ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.content = escape_code_blocks(&doc.content);
        Ok(())
    }
}
