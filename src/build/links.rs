//! Intra-site link rewriting.
//!
//! `[Home](index.md)` becomes `[Home](index.html)` so links between source
//! documents keep working after rendering. Any link target ending in the
//! source extension is rewritten, including absolute URLs such as
//! `https://example.com/readme.md`; no attempt is made to tell local links
//! from remote ones.

use regex::Regex;

/// Rewrites markdown inline-link targets from one extension to another.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    pattern: Regex,
    replacement: String,
}

impl LinkRewriter {
    /// Build a rewriter for `source_ext` → `output_ext` (both without dot).
    /// The source extension matches in any case, like document discovery.
    pub fn new(source_ext: &str, output_ext: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"\[([^\]]+)\]\(([^)]+)\.(?i:{})\)",
            regex::escape(source_ext)
        ))?;
        let replacement = format!("[${{1}}](${{2}}.{})", output_ext.replace('$', "$$"));

        Ok(Self {
            pattern,
            replacement,
        })
    }

    /// Rewrite every matching link in `body`.
    pub fn rewrite(&self, body: &str) -> String {
        self.pattern
            .replace_all(body, self.replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new("md", "html").unwrap()
    }

    #[test]
    fn test_rewrite_relative_link() {
        assert_eq!(rewriter().rewrite("[Home](index.md)"), "[Home](index.html)");
    }

    #[test]
    fn test_rewrite_keeps_path_prefix_and_text() {
        assert_eq!(
            rewriter().rewrite("See [the guide](../docs/getting-started.md) first."),
            "See [the guide](../docs/getting-started.html) first."
        );
    }

    #[test]
    fn test_rewrite_multiple_links() {
        assert_eq!(
            rewriter().rewrite("[a](a.md) and [b](sub/b.md)"),
            "[a](a.html) and [b](sub/b.html)"
        );
    }

    #[test]
    fn test_rewrite_remote_link_with_source_extension() {
        // Remote targets are rewritten too
        assert_eq!(
            rewriter().rewrite("[External](https://example.com/readme.md)"),
            "[External](https://example.com/readme.html)"
        );
    }

    #[test]
    fn test_rewrite_leaves_other_links_alone() {
        let body = "[Site](https://example.com) [Top](#top) [Done](page.html) [Frag](page.md#intro)";
        assert_eq!(rewriter().rewrite(body), body);
    }

    #[test]
    fn test_rewrite_uppercase_extension() {
        assert_eq!(
            rewriter().rewrite("[x](README.MD) [y](notes.Md)"),
            "[x](README.html) [y](notes.html)"
        );
    }

    #[test]
    fn test_rewrite_custom_extensions() {
        let rewriter = LinkRewriter::new("markdown", "htm").unwrap();
        assert_eq!(rewriter.rewrite("[x](x.markdown) [y](y.md)"), "[x](x.htm) [y](y.md)");
    }
}
