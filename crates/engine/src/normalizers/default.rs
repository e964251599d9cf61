//! Fallback for category tags outside the closed set.

use serde_json::{json, Value};

use tomebound_domain::{UnknownView, ViewModel};

use super::Normalizer;
use crate::source::SourcePair;

/// Surfaces the raw record so the page can show a generic debug view.
#[derive(Debug, Clone, Copy)]
pub struct DefaultNormalizer {
    embed_raw: bool,
}

impl DefaultNormalizer {
    pub const fn new(embed_raw: bool) -> Self {
        Self { embed_raw }
    }
}

impl Default for DefaultNormalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Normalizer for DefaultNormalizer {
    fn name(&self) -> &'static str {
        "default"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        let record = if self.embed_raw {
            json!({
                "metadata": sources.metadata().cloned().unwrap_or(Value::Null),
                "turkishContent": sources.turkish().cloned().unwrap_or(Value::Null),
            })
        } else {
            Value::Null
        };
        ViewModel::Unknown(UnknownView::new(sources.category(), record))
    }
}
