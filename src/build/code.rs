//! Fenced code block escaping.
//!
//! Fenced blocks are turned into `<pre><code>` markup before the markdown
//! renderer sees them, so their content is never treated as markdown.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Opening fence with an optional language tag, lazily matched content, and
/// the closing fence. The newline right before the closing fence belongs to
/// the fence, not to the code.
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(\w+)?\n(.*?)\n?```").expect("code block pattern is valid")
});

/// A block as emitted by [`escape_code_blocks`]. Escaped content never
/// contains `<`, so a match cannot run past the block's own closing tags.
static ESCAPED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<pre><code(?: class="language-\w+")?>[^<]*</code></pre>"#)
        .expect("escaped block pattern is valid")
});

/// Replace every fenced code block in `body` with escaped preformatted HTML.
///
/// This is a single pass: running it over its own output escapes the
/// entities a second time.
pub fn escape_code_blocks(body: &str) -> String {
    CODE_BLOCK
        .replace_all(body, |caps: &Captures| {
            let code = html_escape(caps.get(2).map_or("", |m| m.as_str()));
            match caps.get(1) {
                Some(language) => format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    language.as_str(),
                    code
                ),
                None => format!("<pre><code>{}</code></pre>", code),
            }
        })
        .into_owned()
}

/// Byte ranges of the escaped code blocks in `body`.
pub fn escaped_block_spans(body: &str) -> Vec<Range<usize>> {
    ESCAPED_BLOCK.find_iter(body).map(|m| m.range()).collect()
}

/// Escape the characters that would otherwise be read as markup.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<div>&</div>"), "&lt;div&gt;&amp;&lt;/div&gt;");
        assert_eq!(html_escape("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn test_block_with_language() {
        assert_eq!(
            escape_code_blocks("```python\nprint(1)\n```"),
            "<pre><code class=\"language-python\">print(1)</code></pre>"
        );
    }

    #[test]
    fn test_block_without_language() {
        assert_eq!(
            escape_code_blocks("```\nplain\n```"),
            "<pre><code>plain</code></pre>"
        );
    }

    #[test]
    fn test_block_content_is_escaped_once() {
        let out = escape_code_blocks("```html\n<div>&nbsp;</div>\n```");
        assert_eq!(
            out,
            "<pre><code class=\"language-html\">&lt;div&gt;&amp;nbsp;&lt;/div&gt;</code></pre>"
        );
        assert!(!out.contains("&amp;lt;"));
    }

    #[test]
    fn test_multiline_content_is_kept() {
        assert_eq!(
            escape_code_blocks("```rust\nfn main() {\n\n    let x = 1;\n}\n```"),
            "<pre><code class=\"language-rust\">fn main() {\n\n    let x = 1;\n}</code></pre>"
        );
    }

    #[test]
    fn test_multiple_blocks_are_independent() {
        let body = "```a\none\n```\n\nbetween\n\n```b\ntwo\n```\n";
        assert_eq!(
            escape_code_blocks(body),
            "<pre><code class=\"language-a\">one</code></pre>\n\nbetween\n\n\
             <pre><code class=\"language-b\">two</code></pre>\n"
        );
    }

    #[test]
    fn test_no_markdown_processing_inside_blocks() {
        let out = escape_code_blocks("```\n*not emphasis* # not heading\n```");
        assert_eq!(out, "<pre><code>*not emphasis* # not heading</code></pre>");
    }

    #[test]
    fn test_unclosed_fence_is_left_alone() {
        let body = "```python\nprint(1)\n";
        assert_eq!(escape_code_blocks(body), body);
    }

    #[test]
    fn test_escaped_block_spans() {
        let body = escape_code_blocks("intro\n\n```sh\n# not <b>\n```\n\nand `<pre><code>` in prose\n");
        let spans = escaped_block_spans(&body);
        assert_eq!(spans.len(), 1);
        assert_eq!(
            &body[spans[0].clone()],
            "<pre><code class=\"language-sh\"># not &lt;b&gt;</code></pre>"
        );
    }

    #[test]
    fn test_escaping_is_not_idempotent_when_reapplied() {
        let once = html_escape("<div>");
        assert_eq!(once, "&lt;div&gt;");
        assert_eq!(html_escape(&once), "&amp;lt;div&amp;gt;");
    }
}
