//! Turkish-aware casing and collation helpers.

/// Lowercases a single character using Turkish rules (`I` -> `ı`, `İ` -> `i`).
fn lower_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        other => other.to_lowercase().next().unwrap_or(other),
    }
}

/// Uppercases a single character using Turkish rules (`i` -> `İ`, `ı` -> `I`).
fn upper_char(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        other => other.to_uppercase().next().unwrap_or(other),
    }
}

/// Lowercases a string using Turkish casing rules.
pub fn turkish_lowercase(value: &str) -> String {
    value.chars().map(lower_char).collect()
}

/// Uppercases a string using Turkish casing rules.
pub fn turkish_uppercase(value: &str) -> String {
    value.chars().map(upper_char).collect()
}

/// Case-folds a string for case-insensitive comparison.
///
/// All four `i` variants collapse to `i` so that English keys (`Light`)
/// and Turkish keys (`HAFİF`, `hafif`) compare equal regardless of which
/// casing convention produced them.
///
/// ```
/// use tomebound_domain::common::fold_case;
///
/// assert_eq!(fold_case("HAFİF"), fold_case("hafif"));
/// assert_eq!(fold_case("FINESSE"), fold_case("finesse"));
/// ```
pub fn fold_case(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            'I' | 'İ' | 'ı' => 'i',
            other => other.to_lowercase().next().unwrap_or(other),
        })
        .collect()
}

/// Title-cases a slug or phrase: `magic-missile` -> `Magic Missile`.
///
/// Hyphens and underscores become spaces. The first letter of each word is
/// uppercased with Turkish rules; the remainder of the word is kept as-is.
pub fn title_case(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.push(upper_char(first));
                    out.extend(chars);
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvyz";

/// Builds a sort key that orders strings by the Turkish alphabet.
///
/// Letters outside the Turkish alphabet (q, w, x, digits, punctuation)
/// sort after it by code point, so English names still sort stably.
pub fn collation_key(value: &str) -> Vec<u32> {
    value
        .chars()
        .map(lower_char)
        .map(|c| match TURKISH_ALPHABET.chars().position(|a| a == c) {
            Some(pos) => pos as u32,
            None => 0x100 + c as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_casing() {
        assert_eq!(turkish_uppercase("iğne"), "İĞNE");
        assert_eq!(turkish_lowercase("IŞIK"), "ışık");
        assert_eq!(turkish_lowercase("İZMİR"), "izmir");
    }

    #[test]
    fn test_fold_case_collapses_i_variants() {
        assert_eq!(fold_case("Işık"), fold_case("işik"));
        assert_eq!(fold_case("  Two-Handed "), "two-handed");
    }

    #[test]
    fn test_title_case_slugs() {
        assert_eq!(title_case("magic-missile"), "Magic Missile");
        assert_eq!(title_case("cure_wounds"), "Cure Wounds");
        assert_eq!(title_case("ilahi kalkan"), "İlahi Kalkan");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_collation_orders_turkish_letters() {
        let mut words = vec!["Şifa", "Sis", "Çekim", "Cin", "Zırh", "Işık", "İksir"];
        words.sort_by_key(|w| collation_key(w));
        assert_eq!(
            words,
            vec!["Cin", "Çekim", "Işık", "İksir", "Sis", "Şifa", "Zırh"]
        );
    }
}
