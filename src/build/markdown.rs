//! Markdown to HTML conversion.
//!
//! The transformed body (headings and code blocks already turned into raw
//! HTML) is handed to pulldown-cmark unchanged; raw HTML blocks pass through.

use pulldown_cmark::{Options, Parser, html};

use crate::config::MarkdownConfig;

#[derive(thiserror::Error, Debug)]
pub enum MarkdownError {
    #[error("invalid markdown extension: {0}")]
    InvalidExtension(String),
}

/// Turn the configured extension names into parser options.
pub fn markdown_options(markdown_config: &MarkdownConfig) -> Result<Options, MarkdownError> {
    let mut options = Options::empty();
    for extension in &markdown_config.extensions {
        match extension.as_str() {
            "definition_lists" => options.insert(Options::ENABLE_DEFINITION_LIST),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "gfm" => options.insert(Options::ENABLE_GFM),
            "heading_attributes" => options.insert(Options::ENABLE_HEADING_ATTRIBUTES),
            "strikethrough" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "tables" => options.insert(Options::ENABLE_TABLES),
            "tasklists" => options.insert(Options::ENABLE_TASKLISTS),
            other => return Err(MarkdownError::InvalidExtension(other.to_string())),
        }
    }
    Ok(options)
}

/// Render markdown to HTML.
pub fn render_markdown(markdown: &str, options: Options) -> String {
    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_options() -> Options {
        markdown_options(&MarkdownConfig::default()).unwrap()
    }

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("Hello *world*\n\n- one\n- two", default_options());
        assert!(html.contains("<p>Hello <em>world</em></p>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let body = "<h1 id=\"heading-0\">Title</h1>\n\n\
                    <pre><code class=\"language-python\">print(1)</code></pre>\n\n\
                    Text";
        let html = render_markdown(body, default_options());
        assert!(html.contains("<h1 id=\"heading-0\">Title</h1>"));
        assert!(html.contains("<pre><code class=\"language-python\">print(1)</code></pre>"));
        assert!(html.contains("<p>Text</p>"));
    }

    #[test]
    fn test_rewritten_links_render() {
        let html = render_markdown("[Home](index.html)", default_options());
        assert!(html.contains("<a href=\"index.html\">Home</a>"));
    }

    #[test]
    fn test_tables_extension() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |";
        assert!(render_markdown(md, default_options()).contains("<table>"));
        assert!(!render_markdown(md, Options::empty()).contains("<table>"));
    }

    #[test]
    fn test_invalid_extension() {
        let config = MarkdownConfig {
            extensions: vec!["not_a_real_extension".to_string()],
        };
        assert!(markdown_options(&config).is_err());
    }
}
