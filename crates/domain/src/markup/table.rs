//! GFM pipe-table parsing.
//!
//! A table is a run of lines that all start with `|`: a header row, a
//! separator row (`|---|:---:|`), then body rows. Input that breaks any
//! of those rules (no separator, a row with the wrong cell count, a line
//! without a leading pipe) is returned as [`ParsedTable::PlainText`].

use std::sync::OnceLock;

use serde::Serialize;

static SEPARATOR_ROW_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

fn separator_regex() -> &'static regex_lite::Regex {
    SEPARATOR_ROW_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"^\|(\s*:?-+:?\s*\|)+$")
            .expect("SEPARATOR_ROW_REGEX pattern is invalid")
    })
}

/// A parsed pipe table. Cells are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub header_cells: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Writes the table back out as pipe-table markdown.
    pub fn serialize(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(row_line(&self.header_cells));
        lines.push(row_line(&vec!["---".to_string(); self.header_cells.len()]));
        lines.extend(self.rows.iter().map(|row| row_line(row)));
        lines.join("\n")
    }

    pub fn column_count(&self) -> usize {
        self.header_cells.len()
    }
}

fn row_line(cells: &[String]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell);
        line.push_str(" |");
    }
    line
}

/// Result of [`parse_table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParsedTable {
    Table(Table),
    PlainText { text: String },
}

impl ParsedTable {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ParsedTable::Table(table) => Some(table),
            ParsedTable::PlainText { .. } => None,
        }
    }

    pub fn into_table(self) -> Option<Table> {
        match self {
            ParsedTable::Table(table) => Some(table),
            ParsedTable::PlainText { .. } => None,
        }
    }

    /// Markdown form: the table re-serialized, or the original text.
    pub fn serialize(&self) -> String {
        match self {
            ParsedTable::Table(table) => table.serialize(),
            ParsedTable::PlainText { text } => text.clone(),
        }
    }
}

/// Parses a pipe-table blob.
pub fn parse_table(text: &str) -> ParsedTable {
    match try_parse(text) {
        Some(table) => ParsedTable::Table(table),
        None => ParsedTable::PlainText {
            text: text.to_string(),
        },
    }
}

fn try_parse(text: &str) -> Option<Table> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 || !lines.iter().all(|line| is_pipe_line(line)) {
        return None;
    }
    if !is_separator(lines[1]) {
        return None;
    }

    let header_cells = split_row(lines[0]);
    if header_cells.is_empty() || split_row(lines[1]).len() != header_cells.len() {
        return None;
    }

    let mut rows = Vec::with_capacity(lines.len() - 2);
    for line in &lines[2..] {
        let cells = split_row(line);
        if cells.len() != header_cells.len() {
            return None;
        }
        rows.push(cells);
    }

    Some(Table { header_cells, rows })
}

fn is_pipe_line(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    let line = if line.ends_with('|') {
        line.to_string()
    } else {
        format!("{line}|")
    };
    separator_regex().is_match(&line)
}

/// Splits one table row into trimmed cells. Outer pipes are optional.
fn split_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);
    line.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Finds the first well-formed table embedded in free text.
///
/// Returns the table and the text with the table lines removed. When no
/// run of pipe lines parses as a table, the text is returned unchanged.
pub fn extract_table(text: &str) -> (Option<Table>, String) {
    let lines: Vec<&str> = text.lines().collect();

    let mut start = 0;
    while start < lines.len() {
        if !is_pipe_line(lines[start]) {
            start += 1;
            continue;
        }
        let end = lines[start..]
            .iter()
            .position(|line| !is_pipe_line(line))
            .map_or(lines.len(), |offset| start + offset);

        if let Some(table) = try_parse(&lines[start..end].join("\n")) {
            let rest: Vec<&str> = lines[..start]
                .iter()
                .chain(lines[end..].iter())
                .copied()
                .collect();
            return (Some(table), rest.join("\n").trim().to_string());
        }
        start = end;
    }

    (None, text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &str = "| Seviye | Etki |\n|---|---|\n| 1 | Yetenek kontrollerinde dezavantaj |\n| 2 | Hız yarıya iner |";

    #[test]
    fn parses_header_and_rows() {
        let table = parse_table(LEVELS).into_table().expect("well-formed");
        assert_eq!(table.header_cells, vec!["Seviye", "Etki"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["2", "Hız yarıya iner"]);
    }

    #[test]
    fn alignment_markers_are_separators() {
        let parsed = parse_table("| a | b |\n|:---|---:|\n| 1 | 2 |");
        assert!(parsed.as_table().is_some());
    }

    #[test]
    fn missing_separator_is_plain_text() {
        let text = "| a | b |\n| 1 | 2 |";
        assert_eq!(
            parse_table(text),
            ParsedTable::PlainText {
                text: text.to_string()
            }
        );
    }

    #[test]
    fn cell_count_mismatch_is_plain_text() {
        let parsed = parse_table("| a | b |\n|---|---|\n| 1 | 2 | 3 |");
        assert!(parsed.as_table().is_none());
    }

    #[test]
    fn non_table_text_is_plain_text() {
        assert!(parse_table("sadece metin").as_table().is_none());
        assert!(parse_table("").as_table().is_none());
    }

    #[test]
    fn serialize_round_trip_is_stable() {
        for input in [
            LEVELS,
            "|a|b|c|\n|-|-|-|",
            "| x |\n| --- |\n|  |\n| y |",
            "not a table",
            "| a | b |\n| 1 | 2 |",
        ] {
            let once = parse_table(input);
            assert_eq!(parse_table(&once.serialize()), once, "unstable for {input:?}");
        }
    }

    #[test]
    fn serialize_format() {
        let table = Table {
            header_cells: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into(), "2".into()]],
        };
        assert_eq!(table.serialize(), "| a | b |\n| --- | --- |\n| 1 | 2 |");
    }

    #[test]
    fn extract_table_splits_surrounding_text() {
        let text = format!("Giriş metni.\n{LEVELS}\nSon not.");
        let (table, rest) = extract_table(&text);
        assert_eq!(table.map(|t| t.rows.len()), Some(2));
        assert_eq!(rest, "Giriş metni.\nSon not.");
    }

    #[test]
    fn extract_table_without_table_returns_text() {
        let (table, rest) = extract_table("| yarım tablo |\nmetin");
        assert!(table.is_none());
        assert_eq!(rest, "| yarım tablo |\nmetin");
    }
}
