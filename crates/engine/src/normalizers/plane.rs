//! Planes of existence.

use tomebound_domain::dictionaries::{ALIGNMENTS, PLANE_CATEGORIES};
use tomebound_domain::{PlaneAlignment, PlaneView, ThemeTokens, ViewModel};

use super::Normalizer;
use crate::source::SourcePair;

pub struct PlaneNormalizer;

impl Normalizer for PlaneNormalizer {
    fn name(&self) -> &'static str {
        "plane"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Plane(normalize_plane(sources))
    }
}

pub fn normalize_plane(sources: &SourcePair<'_>) -> PlaneView {
    let mut plane_type = sources.term("type", "type", &PLANE_CATEGORIES);
    if plane_type.is_missing() {
        plane_type = sources.term("category", "category", &PLANE_CATEGORIES);
    }

    let alignment = sources.text_translated("alignment", "alignment", &ALIGNMENTS);
    let alignment_bucket = alignment
        .as_option()
        .map_or(PlaneAlignment::Neutral, |text| PlaneAlignment::classify(text));

    PlaneView {
        name: sources.text("name", "name"),
        plane_type,
        alignment,
        alignment_bucket,
        alignment_theme: ThemeTokens::for_plane_alignment(alignment_bucket),
        description: sources.description("description", "desc"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tomebound_domain::Theme;

    #[test]
    fn outer_plane_from_metadata() {
        let meta = json!({
            "name": "Mount Celestia",
            "type": "Outer Plane",
            "alignment": "lawful good",
            "desc": "The Seven Heavens of Mount Celestia."
        });
        let view = normalize_plane(&SourcePair::new("PLANES", Some(&meta), None));

        let plane_type = view.plane_type.as_option().expect("type");
        assert_eq!(plane_type.name, "Dış Düzlem");
        assert_eq!(plane_type.id, Some("outer"));
        assert_eq!(view.alignment.display(), "Yasal İyi");
        assert_eq!(view.alignment_bucket, PlaneAlignment::Good);
        assert_eq!(view.alignment_theme.theme, Theme::Amber);
    }

    #[test]
    fn category_key_and_localized_alignment() {
        let tr = json!({"name": "Abis", "category": "Dış Düzlem", "alignment": "Kaotik Kötü"});
        let view = normalize_plane(&SourcePair::new("PLANES", None, Some(&tr)));
        assert_eq!(view.plane_type.as_option().and_then(|t| t.id), Some("outer"));
        assert_eq!(view.alignment_bucket, PlaneAlignment::Evil);
        assert_eq!(view.alignment_theme.theme, Theme::Red);
    }

    #[test]
    fn missing_alignment_is_neutral() {
        let tr = json!({"name": "Astral Düzlem"});
        let view = normalize_plane(&SourcePair::new("PLANES", None, Some(&tr)));
        assert!(view.alignment.is_missing());
        assert!(view.plane_type.is_missing());
        assert_eq!(view.alignment_bucket, PlaneAlignment::Neutral);
        assert_eq!(view.alignment_theme.theme, Theme::Slate);
    }
}
