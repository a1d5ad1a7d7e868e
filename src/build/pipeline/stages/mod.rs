//! Default pipeline stages.
//!
//! The standard page rendering pipeline consists of:
//!
//! 1. **LinkStage** - Rewrite `.md` link targets to `.html`
//! 2. **CodeBlockStage** - Escape fenced code blocks into `<pre><code>`
//! 3. **HeadingStage** - Anchor headings and build the table of contents
//! 4. **MarkdownStage** - Convert markdown to HTML
//! 5. **TemplateStage** - Wrap content in the page template

mod code;
mod headings;
mod links;
mod markdown;
mod template;

pub use code::CodeBlockStage;
pub use headings::HeadingStage;
pub use links::LinkStage;
pub use markdown::MarkdownStage;
pub use template::TemplateStage;
