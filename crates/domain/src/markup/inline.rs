//! Block and inline rendering.

use super::table::parse_table;
use super::tree::{Block, DisplayTree, Inline};

/// Renders markdown-subset text into a [`DisplayTree`].
///
/// Pure and deterministic: rendering the same input twice yields equal
/// trees. A run of pipe lines that does not parse as a table is rendered
/// as ordinary paragraph lines.
pub fn render_inline(text: &str) -> DisplayTree {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            i += 1;
            continue;
        }

        if let Some((level, content)) = heading(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading {
                level,
                children: parse_inlines(content),
            });
            i += 1;
            continue;
        }

        if line.starts_with('|') {
            let end = lines[i..]
                .iter()
                .position(|l| !l.trim().starts_with('|'))
                .map_or(lines.len(), |offset| i + offset);

            if let Some(table) = parse_table(&lines[i..end].join("\n")).into_table() {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(Block::Table(table));
            } else {
                paragraph.extend(lines[i..end].iter().map(|l| l.trim()));
            }
            i = end;
            continue;
        }

        paragraph.push(line);
        i += 1;
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    DisplayTree::new(blocks)
}

/// `## Title` -> `(2, "Title")`. Needs one to six `#` and a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() {
        return Some((hashes as u8, ""));
    }
    rest.strip_prefix(|c: char| c.is_whitespace())
        .map(|content| (hashes as u8, content.trim()))
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    let mut children = Vec::new();
    for (index, line) in lines.drain(..).enumerate() {
        if index > 0 {
            children.push(Inline::SoftBreak);
        }
        children.extend(parse_inlines(line));
    }
    blocks.push(Block::Paragraph { children });
}

/// Parses bold and italic spans. Unmatched markers stay literal.
fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut buffer = String::new();
    let mut prev: Option<char> = None;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some((node, consumed)) = span_at(rest, prev) {
            flush_text(&mut buffer, &mut out);
            out.push(node);
            prev = rest[..consumed].chars().last();
            rest = &rest[consumed..];
            continue;
        }
        buffer.push(c);
        prev = Some(c);
        rest = &rest[c.len_utf8()..];
    }
    flush_text(&mut buffer, &mut out);
    out
}

fn flush_text(buffer: &mut String, out: &mut Vec<Inline>) {
    if !buffer.is_empty() {
        out.push(Inline::text(std::mem::take(buffer)));
    }
}

/// Tries to read a bold or italic span at the start of `rest`.
/// Returns the node and the number of bytes consumed.
fn span_at(rest: &str, prev: Option<char>) -> Option<(Inline, usize)> {
    if let Some(body) = rest.strip_prefix("**") {
        let end = body.find("**")?;
        let inner = &body[..end];
        if !is_tight(inner) {
            return None;
        }
        let node = Inline::Bold {
            children: parse_inlines(inner),
        };
        return Some((node, end + 4));
    }

    let marker = rest.chars().next()?;
    if marker != '*' && marker != '_' {
        return None;
    }
    // `_` only opens at a word boundary, so snake_case stays literal.
    if marker == '_' && prev.is_some_and(char::is_alphanumeric) {
        return None;
    }

    let body = &rest[1..];
    let end = closing_marker(body, marker)?;
    let inner = &body[..end];
    if !is_tight(inner) {
        return None;
    }
    let node = Inline::Italic {
        children: parse_inlines(inner),
    };
    Some((node, end + 2))
}

/// Byte offset of the marker that closes an italic span.
fn closing_marker(body: &str, marker: char) -> Option<usize> {
    let chars: Vec<(usize, char)> = body.char_indices().collect();
    for (pos, &(offset, c)) in chars.iter().enumerate() {
        if c != marker {
            continue;
        }
        let next = chars.get(pos + 1).map(|(_, c)| *c);
        if marker == '*' {
            // Part of a `**` pair: not a closer.
            let prev = pos.checked_sub(1).and_then(|p| chars.get(p)).map(|(_, c)| *c);
            if next == Some('*') || prev == Some('*') {
                continue;
            }
        } else if next.is_some_and(char::is_alphanumeric) {
            continue;
        }
        return Some(offset);
    }
    None
}

/// Non-empty with no leading or trailing whitespace.
fn is_tight(inner: &str) -> bool {
    !inner.is_empty() && inner.trim() == inner
}
