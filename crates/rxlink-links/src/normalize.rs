//! Free-text normalization for URL fragments.

use std::sync::LazyLock;

use regex::Regex;

/// Combination qualifier up to the end of its line, with the whitespace before it.
static QUALIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:kombinasyon|combination).*").expect("Invalid qualifier regex")
});

/// Separator between components of a multi-ingredient product:
/// the Turkish conjunction "ve" or a "+".
static COMPONENT_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[+\s]+ve\s+|\+").expect("Invalid component regex")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static NON_SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-]").expect("Invalid slug regex"));

/// Collapses whitespace runs to one space and trims. Blank input gives `""`.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds a compound-database slug from an active-ingredient field.
///
/// Only the first component of a combination product is kept, and the result
/// is restricted to `[a-z0-9-]`. Letters outside ASCII are dropped rather than
/// transliterated, so `"İbuprofen"` becomes `"ibuprofen"` but `"Doğal"`
/// becomes `"doal"`.
pub fn compound_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let lowered = lowered.trim();
    if lowered.is_empty() {
        return String::new();
    }

    let unqualified = QUALIFIER_REGEX.replace_all(lowered, "");
    let first = COMPONENT_SPLIT_REGEX
        .split(&unqualified)
        .next()
        .unwrap_or_default()
        .trim();

    let dashed = WHITESPACE_REGEX.replace_all(first, "-");
    NON_SLUG_REGEX.replace_all(&dashed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(collapse_whitespace("  Parol \t 500\nmg "), "Parol 500 mg");
        assert_eq!(collapse_whitespace(" \t\n"), "");
    }

    #[test]
    fn strips_combination_qualifier() {
        assert_eq!(compound_slug("Metformin Combination Tablets"), "metformin");
        assert_eq!(compound_slug("Metformin kombinasyonları"), "metformin");
    }

    #[test]
    fn strips_every_qualifier_in_multi_line_cells() {
        assert_eq!(
            compound_slug("metformin kombinasyon\nsitagliptin kombinasyon"),
            "metformin-sitagliptin"
        );
        assert_eq!(
            compound_slug("Valsartan Combination\nHidroklorotiyazid combination tablet"),
            "valsartan-hidroklorotiyazid"
        );
    }

    #[test]
    fn keeps_first_component() {
        assert_eq!(compound_slug("Paracetamol + Kodein"), "paracetamol");
        assert_eq!(compound_slug("Paracetamol+Kodein"), "paracetamol");
        assert_eq!(
            compound_slug("Amoksisilin ve Klavulanik Asit Kombinasyonu"),
            "amoksisilin"
        );
    }

    #[test]
    fn ve_inside_a_word_is_not_a_separator() {
        assert_eq!(compound_slug("Levofloksasin"), "levofloksasin");
        assert_eq!(compound_slug("Valsartan"), "valsartan");
    }

    #[test]
    fn dashes_multi_word_names() {
        assert_eq!(compound_slug("  Asetilsalisilik   Asit "), "asetilsalisilik-asit");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(compound_slug("İbuprofen"), "ibuprofen");
        assert_eq!(compound_slug("Doğal Çay"), "doal-ay");
    }

    #[test]
    fn leading_separator_leaves_nothing() {
        assert_eq!(compound_slug("+ Kodein"), "");
        assert_eq!(compound_slug("   "), "");
    }
}
