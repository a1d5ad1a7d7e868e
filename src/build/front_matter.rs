//! Front matter splitting and metadata lookup.
//!
//! Front matter is a block delimited by `---` lines at the very start of a
//! document:
//!
//! ```markdown
//! ---
//! title: 'My Page'
//! template: "blog"
//! draft: true
//! ---
//! # Content starts here
//! ```
//!
//! Only three keys are ever read (`template`, `title`, `draft`), so the block
//! is parsed as flat `key: value` lines rather than as full YAML.

use std::collections::HashMap;

const DELIMITER: &str = "---";

/// Template used when the metadata names none.
pub const DEFAULT_TEMPLATE: &str = "default";

/// A document split into its metadata block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Text between the delimiters, `None` if the document has no block
    pub metadata: Option<&'a str>,
    /// Everything after the closing delimiter line
    pub body: &'a str,
}

/// Split raw document text into metadata and body.
///
/// The block must open on the first line and ends at the earliest following
/// `---` line. An unterminated block means "no metadata": the whole text is
/// returned as the body.
pub fn split_front_matter(content: &str) -> SplitDocument<'_> {
    let no_match = SplitDocument {
        metadata: None,
        body: content,
    };

    let Some(after_opening) = content.strip_prefix("---\n") else {
        return no_match;
    };

    // Empty block: the closing delimiter directly follows the opening one
    if let Some(rest) = closing_delimiter_at(after_opening) {
        return SplitDocument {
            metadata: Some(""),
            body: rest,
        };
    }

    let mut search_from = 0;
    while let Some(pos) = after_opening[search_from..].find("\n---") {
        let newline = search_from + pos;
        if let Some(body) = closing_delimiter_at(&after_opening[newline + 1..]) {
            return SplitDocument {
                metadata: Some(&after_opening[..newline]),
                body,
            };
        }
        search_from = newline + 1;
    }

    no_match
}

/// If `text` starts with a line that is exactly `---`, return what follows it.
fn closing_delimiter_at(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DELIMITER)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('\n')
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// A single metadata value, remembering whether it was quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    /// `key: 'value'` or `key: "value"`
    Quoted(String),
    /// `key: value`
    Bare(String),
}

/// Flat key-value view of a front matter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: HashMap<String, MetaValue>,
}

impl Metadata {
    /// Parse `key: value` lines. Lines without a colon are ignored; when a key
    /// repeats, the first occurrence wins.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();

        for line in text.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries
                .entry(key.to_string())
                .or_insert_with(|| parse_value(value.trim()));
        }

        Self { entries }
    }

    /// Parse the optional metadata half of a [`SplitDocument`].
    pub fn from_block(block: Option<&str>) -> Self {
        block.map(Self::parse).unwrap_or_default()
    }

    /// The `template` field, or `"default"`.
    pub fn template(&self) -> &str {
        self.quoted("template").unwrap_or(DEFAULT_TEMPLATE)
    }

    /// The `title` field, or the empty string.
    pub fn title(&self) -> &str {
        self.quoted("title").unwrap_or("")
    }

    /// True iff a `draft: true` line is present (case-insensitive).
    pub fn is_draft(&self) -> bool {
        self.entries.iter().any(|(key, value)| {
            key.eq_ignore_ascii_case("draft")
                && matches!(value, MetaValue::Bare(v) if v.eq_ignore_ascii_case("true"))
        })
    }

    /// Raw access to any key.
    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    fn quoted(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            MetaValue::Quoted(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

fn parse_value(value: &str) -> MetaValue {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return MetaValue::Quoted(value[1..value.len() - 1].to_string());
        }
    }
    MetaValue::Bare(value.to_string())
}
