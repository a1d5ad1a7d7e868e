//! Page rendering pipeline.
//!
//! The pipeline transforms one document through a series of stages:
//! 1. Link rewriting (`.md` targets become `.html`)
//! 2. Code block escaping
//! 3. Heading anchors and table of contents
//! 4. Markdown rendering
//! 5. Template rendering
//!
//! Draft documents skip straight to the template stage. The pipeline only
//! produces HTML text; writing it out is the caller's job.

mod context;
mod document;
mod error;
mod stages;

pub use context::PipelineContext;
pub use document::ProcessingDocument;
pub use error::PipelineError;

use stages::{CodeBlockStage, HeadingStage, LinkStage, MarkdownStage, TemplateStage};

/// A stage in the document processing pipeline.
pub trait Stage: Send + Sync {
    /// Unique name for this stage (used for insertion points).
    fn name(&self) -> &'static str;

    /// Whether this stage also runs for draft documents.
    fn applies_to_drafts(&self) -> bool {
        false
    }

    /// Transform the document in place.
    fn process(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The page rendering pipeline.
///
/// The default pipeline is: links → code → headings → markdown → template.
///
/// # Extension Points
///
/// Insert custom stages using `insert_after`:
///
/// ```ignore
/// pipeline.insert_after("headings", MyCustomStage);
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(LinkStage);
        pipeline.add_stage(CodeBlockStage);
        pipeline.add_stage(HeadingStage);
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TemplateStage);
        pipeline
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Insert a stage after the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    #[allow(dead_code)]
    pub fn insert_after<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self
            .stages
            .iter()
            .position(|s| s.name() == name)
            .unwrap_or_else(|| panic!("stage '{}' not found in pipeline", name));
        self.stages.insert(pos + 1, Box::new(stage));
        self
    }

    /// Run every applicable stage on a document.
    pub fn run(
        &self,
        doc: &mut ProcessingDocument,
        ctx: &PipelineContext,
    ) -> Result<(), PipelineError> {
        let draft = doc.is_draft();
        for stage in &self.stages {
            if draft && !stage.applies_to_drafts() {
                log::debug!("Skipping stage '{}' for draft", stage.name());
                continue;
            }
            stage.process(doc, ctx)?;
        }
        Ok(())
    }

    /// Render raw document text (front matter included) to a final page.
    pub fn render_page(&self, raw: &str, ctx: &PipelineContext) -> Result<String, PipelineError> {
        let mut doc = ProcessingDocument::parse(raw);
        self.run(&mut doc, ctx)?;
        doc.output_html.ok_or_else(|| {
            PipelineError::stage("template", "pipeline finished without producing a page")
        })
    }

    /// Get the names of all stages in order.
    #[allow(dead_code)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
