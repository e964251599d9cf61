//! Spell level and component displays.

use crate::common::fold_case;

/// `Hazırlık Büyüsü` for cantrips, `{n}. Seviye` otherwise.
pub fn spell_level_label(level: u8) -> String {
    if level == 0 {
        "Hazırlık Büyüsü".to_string()
    } else {
        format!("{}. Seviye", level)
    }
}

/// `V, S, M (bir tutam kükürt)`. Components are listed in V, S, M order;
/// unknown entries are ignored.
pub fn components_summary<S: AsRef<str>>(components: &[S], material: Option<&str>) -> Option<String> {
    let mut flags = [false; 3];
    for component in components {
        let slot = match fold_case(component.as_ref()).as_str() {
            "v" | "verbal" | "sözlü" | "sözel" => 0,
            "s" | "somatic" | "somatik" | "bedensel" => 1,
            "m" | "material" | "maddi" | "materyal" => 2,
            _ => continue,
        };
        flags[slot] = true;
    }

    let material = material.map(str::trim).filter(|m| !m.is_empty());
    let mut parts: Vec<String> = ["V", "S"]
        .iter()
        .zip(flags)
        .filter(|(_, set)| *set)
        .map(|(letter, _)| letter.to_string())
        .collect();
    if flags[2] {
        parts.push(match material {
            Some(material) => format!("M ({})", material),
            None => "M".to_string(),
        });
    }

    (!parts.is_empty()).then(|| parts.join(", "))
}
