// SPDX-License-Identifier: MIT

//! Line-oriented text block parser for the agent summary page.
//!
//! The summary asset is a trusted, hand-authored document using four
//! markdown-ish prefixes (`# `, `## `, `> `, `- `); a full CommonMark
//! engine would be wasted on it. One forward pass classifies each line
//! by prefix, grouping consecutive list lines into a single block. The
//! parser is total: any string in, ordered blocks out, never an error.

/// Items shaped like `Label: detail` get the label emphasized in the
/// rendered list. A colon this far in (or further) reads as prose
/// punctuation rather than a label separator. Hand-tuned against the
/// shipped asset.
pub const EMPHASIS_COLON_LIMIT: usize = 40;

/// One entry of a [`ContentBlock::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Leading `Label` when the item matches the `Label: detail` shape.
    pub emphasized: Option<String>,
    /// The remainder of the item; keeps the colon when `emphasized` is set.
    pub rest: String,
}

/// A typed block of the summary document, in source order.
///
/// The document title (`# ` line) is not represented here — the caller
/// renders it separately, so the parser drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading { text: String },
    Quote { text: String },
    List(Vec<ListItem>),
    Paragraph { text: String },
}

/// Parse a document into an ordered sequence of content blocks.
///
/// Classification per line, highest-priority prefix first:
/// `# ` title (dropped), `> ` quote, `## ` heading, `- ` list item
/// (consecutive list lines merge into one block; any other line ends
/// the group, blank lines included), blank (dropped), anything else a
/// paragraph. No backtracking, no nesting, no escapes.
///
/// # Examples
///
/// ```
/// use folio::blocks::{parse_blocks, ContentBlock};
/// let blocks = parse_blocks("# Title\nHello");
/// assert_eq!(blocks, vec![ContentBlock::Paragraph { text: "Hello".into() }]);
/// ```
pub fn parse_blocks(document: &str) -> Vec<ContentBlock> {
    let lines: Vec<&str> = document.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.starts_with("# ") {
            i += 1;
            continue;
        }

        if let Some(stripped) = line.strip_prefix("> ") {
            blocks.push(ContentBlock::Quote {
                text: stripped.trim_start().to_string(),
            });
            i += 1;
            continue;
        }

        if let Some(stripped) = line.strip_prefix("## ") {
            blocks.push(ContentBlock::Heading {
                text: stripped.to_string(),
            });
            i += 1;
            continue;
        }

        if line.starts_with("- ") {
            let mut items = Vec::new();
            while i < lines.len() {
                let Some(stripped) = lines[i].strip_prefix("- ") else {
                    break;
                };
                items.push(list_item(stripped.trim_start()));
                i += 1;
            }
            blocks.push(ContentBlock::List(items));
            continue;
        }

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        blocks.push(ContentBlock::Paragraph {
            text: line.to_string(),
        });
        i += 1;
    }

    blocks
}

fn list_item(text: &str) -> ListItem {
    match text.find(':') {
        Some(idx) if idx > 0 && idx < EMPHASIS_COLON_LIMIT => ListItem {
            emphasized: Some(text[..idx].to_string()),
            rest: text[idx..].to_string(),
        },
        _ => ListItem {
            emphasized: None,
            rest: text.to_string(),
        },
    }
}
