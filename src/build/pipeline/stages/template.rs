//! Page template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ProcessingDocument, Stage};
use crate::build::render::PageContext;

/// Stage that binds content, ToC, title and the assets folder into the
/// template named by the document's front matter.
///
/// After this stage, `doc.output_html` contains the complete HTML page.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn applies_to_drafts(&self) -> bool {
        true
    }

    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let page_context = PageContext {
            content: doc.content.clone(),
            toc: doc.toc.clone(),
            title: doc.title().to_string(),
            scripts_folder: ctx.scripts_folder.to_string(),
        };

        let html = ctx.templates.render_page(doc.template(), &page_context)?;
        doc.output_html = Some(html);

        Ok(())
    }
}
