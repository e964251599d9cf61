//! Markdown/table micro-parser.
//!
//! Free-text content fields use a small markdown subset: `#`..`######`
//! headers, `**bold**`, `*italic*` / `_italic_`, blank-line paragraphs,
//! single-newline soft breaks and GFM pipe tables. Anything else passes
//! through as literal text. Parsing never fails.
//!
//! Every free-text field goes through [`prepare`], which runs [`unescape`]
//! once and then [`render_inline`].

mod inline;
mod table;
mod tree;
mod unescape;

pub use inline::render_inline;
pub use table::{extract_table, parse_table, ParsedTable, Table};
pub use tree::{Block, DisplayTree, Inline};
pub use unescape::unescape;

/// Unescapes raw field text and renders it into a display tree.
pub fn prepare(raw: &str) -> DisplayTree {
    render_inline(&unescape(raw))
}
