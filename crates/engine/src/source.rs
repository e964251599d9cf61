//! Dual-source field access.
//!
//! Every normalizer reads through a [`SourcePair`]: the localized
//! `turkishContent` record first, the authoritative `metadata` record as the
//! fallback. Paths are dotted (`damage.damage_type`); numeric segments index
//! into arrays. `null`, blank strings and empty arrays count as absent.

use serde_json::Value;

use tomebound_domain::{prefer_then_fallback, prepare, Dictionary, DisplayTree, Field, Translation};

/// The two raw sources of one content entry.
#[derive(Debug, Clone, Copy)]
pub struct SourcePair<'a> {
    category: &'a str,
    metadata: Option<&'a Value>,
    turkish: Option<&'a Value>,
}

impl<'a> SourcePair<'a> {
    pub fn new(category: &'a str, metadata: Option<&'a Value>, turkish: Option<&'a Value>) -> Self {
        Self {
            category,
            metadata: metadata.filter(|v| !v.is_null()),
            turkish: turkish.filter(|v| !v.is_null()),
        }
    }

    /// The category tag as received.
    pub fn category(&self) -> &'a str {
        self.category
    }

    pub fn metadata(&self) -> Option<&'a Value> {
        self.metadata
    }

    pub fn turkish(&self) -> Option<&'a Value> {
        self.turkish
    }

    /// Both sources absent: the entry has no data at all.
    pub fn is_empty(&self) -> bool {
        self.metadata.is_none() && self.turkish.is_none()
    }

    /// A nested pair: the same path in both sources.
    pub fn child(&self, tr_path: &str, meta_path: &str) -> SourcePair<'a> {
        SourcePair::new(self.category, self.meta(meta_path), self.tr(tr_path))
    }

    /// Value at `path` in the localized record.
    pub fn tr(&self, path: &str) -> Option<&'a Value> {
        self.turkish.and_then(|root| value_at(root, path)).filter(|v| is_meaningful(v))
    }

    /// Value at `path` in the metadata record.
    pub fn meta(&self, path: &str) -> Option<&'a Value> {
        self.metadata.and_then(|root| value_at(root, path)).filter(|v| is_meaningful(v))
    }

    /// First meaningful localized value among `paths`.
    pub fn tr_any(&self, paths: &[&str]) -> Option<&'a Value> {
        paths.iter().find_map(|path| self.tr(path))
    }

    /// First meaningful metadata value among `paths`.
    pub fn meta_any(&self, paths: &[&str]) -> Option<&'a Value> {
        paths.iter().find_map(|path| self.meta(path))
    }

    /// Text field: localized value, else metadata value.
    pub fn text(&self, tr_path: &str, meta_path: &str) -> Field<String> {
        prefer_then_fallback(self.tr(tr_path).and_then(as_text), || {
            self.meta(meta_path).and_then(as_text)
        })
    }

    /// Text field whose metadata fallback is translated through `dictionary`.
    pub fn text_translated(
        &self,
        tr_path: &str,
        meta_path: &str,
        dictionary: &Dictionary,
    ) -> Field<String> {
        prefer_then_fallback(self.tr(tr_path).and_then(as_text), || {
            self.meta(meta_path)
                .and_then(as_text)
                .map(|raw| dictionary.translate(&raw).name)
        })
    }

    /// Vocabulary term. The localized text is kept as the display name;
    /// the dictionary only contributes the id and detail text.
    pub fn term(&self, tr_path: &str, meta_path: &str, dictionary: &Dictionary) -> Field<Translation> {
        prefer_then_fallback(
            self.tr(tr_path).and_then(as_text).map(|text| {
                let mut translation = dictionary.translate(&text);
                translation.name = text;
                translation
            }),
            || {
                self.meta(meta_path)
                    .and_then(as_text)
                    .map(|raw| dictionary.translate(&raw))
            },
        )
    }

    pub fn integer(&self, tr_path: &str, meta_path: &str) -> Field<i64> {
        prefer_then_fallback(self.tr(tr_path).and_then(as_integer), || {
            self.meta(meta_path).and_then(as_integer)
        })
    }

    pub fn number(&self, tr_path: &str, meta_path: &str) -> Field<f64> {
        prefer_then_fallback(self.tr(tr_path).and_then(as_number), || {
            self.meta(meta_path).and_then(as_number)
        })
    }

    pub fn flag(&self, tr_path: &str, meta_path: &str) -> Option<bool> {
        self.tr(tr_path)
            .and_then(as_bool)
            .or_else(|| self.meta(meta_path).and_then(as_bool))
    }

    /// List field: the localized list when non-empty, else the metadata list.
    pub fn list(&self, tr_path: &str, meta_path: &str) -> Vec<String> {
        let localized = self.tr(tr_path).map(as_text_list).unwrap_or_default();
        if !localized.is_empty() {
            return localized;
        }
        self.meta(meta_path).map(as_text_list).unwrap_or_default()
    }

    /// List field whose metadata fallback is translated term by term.
    pub fn list_translated(&self, tr_path: &str, meta_path: &str, dictionary: &Dictionary) -> Vec<String> {
        let localized = self.tr(tr_path).map(as_text_list).unwrap_or_default();
        if !localized.is_empty() {
            return localized;
        }
        self.meta(meta_path)
            .map(as_text_list)
            .unwrap_or_default()
            .iter()
            .map(|raw| dictionary.translate(raw).name)
            .collect()
    }

    /// Free text, joined from paragraph arrays where needed.
    pub fn long_text(&self, tr_path: &str, meta_path: &str) -> Option<String> {
        self.tr(tr_path)
            .and_then(join_paragraphs)
            .or_else(|| self.meta(meta_path).and_then(join_paragraphs))
    }

    /// Free text rendered into a display tree (unescaped once).
    pub fn description(&self, tr_path: &str, meta_path: &str) -> DisplayTree {
        self.long_text(tr_path, meta_path)
            .map(|text| prepare(&text))
            .unwrap_or_default()
    }
}

/// Walks a dotted path.
pub fn value_at<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Display text of a scalar or `{ name }` reference.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
        Value::Number(number) => Some(number.to_string()),
        Value::Object(map) => map.get("name").and_then(as_text),
        _ => None,
    }
}

/// Items of an array, or the comma-separated parts of a string.
pub fn as_text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(as_text).collect(),
        Value::String(text) => text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        other => as_text(other).into_iter().collect(),
    }
}

pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => {
            let digits: String = text
                .trim()
                .chars()
                .enumerate()
                .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+')))
                .map(|(_, c)| c)
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => match tomebound_domain::common::fold_case(text).as_str() {
            "true" | "yes" | "evet" | "1" => Some(true),
            // Folded form: `hayır` arrives as `hayir`.
            "false" | "no" | "hayir" | "0" => Some(false),
            _ => None,
        },
        Value::Number(number) => number.as_i64().map(|n| n != 0),
        _ => None,
    }
}

/// Joins a paragraph array into markdown text.
///
/// Consecutive pipe-table lines are joined with a single newline so the
/// table stays contiguous; every other boundary becomes a blank line.
pub fn join_paragraphs(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()).filter(|t| !t.trim().is_empty()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                other => as_text(other),
            }).collect();
            let mut out = String::new();
            let mut prev_table = false;
            for part in &parts {
                let is_table = part.trim_start().starts_with('|');
                if !out.is_empty() {
                    out.push_str(if is_table && prev_table { "\n" } else { "\n\n" });
                }
                out.push_str(part);
                prev_table = is_table;
            }
            Some(out).filter(|t| !t.trim().is_empty())
        }
        _ => None,
    }
}
