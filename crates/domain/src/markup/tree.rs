//! Display tree produced by the micro-parser.

use serde::Serialize;

use super::table::Table;

/// Inline content of a heading or paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Text { text: String },
    Bold { children: Vec<Inline> },
    Italic { children: Vec<Inline> },
    SoftBreak,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    fn push_plain(&self, out: &mut String) {
        match self {
            Inline::Text { text } => out.push_str(text),
            Inline::Bold { children } | Inline::Italic { children } => {
                children.iter().for_each(|child| child.push_plain(out));
            }
            Inline::SoftBreak => out.push('\n'),
        }
    }
}

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading { level: u8, children: Vec<Inline> },
    Paragraph { children: Vec<Inline> },
    Table(Table),
}

/// Renderer-ready document: an ordered list of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayTree {
    blocks: Vec<Block>,
}

impl DisplayTree {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Text content with formatting dropped; blocks are separated by blank lines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            match block {
                Block::Heading { children, .. } | Block::Paragraph { children } => {
                    children.iter().for_each(|child| child.push_plain(&mut out));
                }
                Block::Table(table) => out.push_str(&table.serialize()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_tagged_blocks() {
        let tree = DisplayTree::new(vec![Block::Paragraph {
            children: vec![Inline::text("a"), Inline::SoftBreak],
        }]);
        let json = serde_json::to_value(&tree).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([
                {"type": "paragraph", "children": [{"type": "text", "text": "a"}, {"type": "softBreak"}]}
            ])
        );
    }

    #[test]
    fn plain_text_drops_formatting() {
        let tree = DisplayTree::new(vec![
            Block::Heading {
                level: 2,
                children: vec![Inline::text("Başlık")],
            },
            Block::Paragraph {
                children: vec![
                    Inline::Bold {
                        children: vec![Inline::text("kalın")],
                    },
                    Inline::text(" metin"),
                ],
            },
        ]);
        assert_eq!(tree.plain_text(), "Başlık\n\nkalın metin");
    }
}
