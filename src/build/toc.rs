//! Heading anchors and table of contents.
//!
//! Markdown headings are rewritten in place into explicit heading tags with
//! sequential ids (`heading-0`, `heading-1`, ...), and the collected headings
//! are rendered as a nested ordered list linking to those ids.

use serde::Serialize;

use super::code::escaped_block_spans;

/// Prefix of every generated heading anchor.
const ANCHOR_PREFIX: &str = "heading-";

/// A table of contents entry for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// The heading text
    pub text: String,
    /// The heading id (for anchor links)
    pub id: String,
    /// The heading level (1-6)
    pub level: u8,
}

/// A heading together with the headings nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocNode {
    pub entry: TocEntry,
    pub children: Vec<TocNode>,
}

/// Result of [`transform_headings`].
#[derive(Debug, Clone)]
pub struct HeadingTransform {
    /// Rendered table of contents (empty if there were no headings)
    pub toc_html: String,
    /// The body with every heading line replaced by a heading tag
    pub body: String,
    /// Headings in document order
    pub entries: Vec<TocEntry>,
}

/// Rewrite headings and build the table of contents for one document.
///
/// Lines starting inside a block produced by the code block escaper are left
/// untouched. Each heading tag is followed by a blank line so the markdown
/// renderer ends its HTML block there.
pub fn transform_headings(body: &str) -> HeadingTransform {
    let code_spans = escaped_block_spans(body);
    let mut entries = Vec::new();
    let mut next_anchor = 0usize;
    let mut lines = Vec::new();
    let mut offset = 0;

    for line in body.split('\n') {
        let line_start = offset;
        offset += line.len() + 1;

        if code_spans.iter().any(|span| span.contains(&line_start)) {
            lines.push(line.to_string());
            continue;
        }

        match parse_heading(line) {
            Some((level, text)) => {
                let entry = TocEntry {
                    text: text.to_string(),
                    id: format!("{ANCHOR_PREFIX}{next_anchor}"),
                    level,
                };
                next_anchor += 1;
                lines.push(format!(
                    "<h{level} id=\"{}\">{}</h{level}>\n",
                    entry.id, entry.text
                ));
                entries.push(entry);
            }
            None => lines.push(line.to_string()),
        }
    }

    HeadingTransform {
        toc_html: render_toc(&build_tree(&entries)),
        body: lines.join("\n"),
        entries,
    }
}

/// Recognize `#`..`######` at the start of a line and return the level and
/// trimmed text.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].trim();
    Some((hashes as u8, text))
}

/// Nest entries: a heading is a child of the most recent heading with a
/// lower level. Headings with no such predecessor are roots.
pub fn build_tree(entries: &[TocEntry]) -> Vec<TocNode> {
    let mut nodes = Vec::new();
    let mut i = 0;

    while i < entries.len() {
        let entry = &entries[i];
        let span = entries[i + 1..]
            .iter()
            .take_while(|next| next.level > entry.level)
            .count();

        nodes.push(TocNode {
            entry: entry.clone(),
            children: build_tree(&entries[i + 1..i + 1 + span]),
        });
        i += 1 + span;
    }

    nodes
}

/// Render a ToC forest as nested ordered lists.
pub fn render_toc(nodes: &[TocNode]) -> String {
    if nodes.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ol class=\"toc\">\n");
    push_items(&mut html, nodes);
    html.push_str("</ol>\n");
    html
}

fn push_items(html: &mut String, nodes: &[TocNode]) {
    for node in nodes {
        html.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            node.entry.id, node.entry.text
        ));
        if !node.children.is_empty() {
            html.push_str("\n<ol>\n");
            push_items(html, &node.children);
            html.push_str("</ol>\n");
        }
        html.push_str("</li>\n");
    }
}
