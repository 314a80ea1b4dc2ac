//! Expense-category normalization.
//!
//! Raw category strings arrive misspelled, pluralized, or decorated
//! ("Resturants", "Gas/Auto", "Fun / Night out"). Normalization tries an
//! exact variant lookup first, then falls back to edit-distance matching
//! against the canonical names, and finally passes unknown categories
//! through verbatim rather than dropping them.

/// Minimum normalized Levenshtein similarity for a fuzzy hit. Tolerates a
/// single-character typo in a ~10-character category name without
/// conflating genuinely distinct categories. Strictly-greater comparison:
/// a string scoring exactly this value does not match.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Canonical category names and their known variants. Variant matching is
/// exact after lowercasing and trimming; fuzzy matching runs against the
/// canonical names only.
const CATEGORY_VARIANTS: &[(&str, &[&str])] = &[
    (
        "restaurant",
        &["resturant", "restraunt", "resturants", "restaurants"],
    ),
    ("utilities", &["utility", "utilities"]),
    ("groceries", &["grocery", "groceries", "grocery store"]),
    ("medical", &["medical", "health", "healthcare", "medical/health"]),
    ("gas", &["gas", "fuel", "gas/auto", "auto", "car"]),
    (
        "entertainment",
        &["entertainment", "fun", "night out", "fun / night out"],
    ),
    (
        "miscellaneous",
        &["misc", "miscellaneous", "misc.", "other", "others"],
    ),
];

/// Map a raw category string to its canonical name, or return it unchanged
/// (trimmed, original casing) when nothing matches.
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();

    for (canonical, variants) in CATEGORY_VARIANTS {
        if variants.iter().any(|v| *v == lower) {
            return (*canonical).to_string();
        }
    }

    for (canonical, _) in CATEGORY_VARIANTS {
        if similarity(&lower, canonical) > SIMILARITY_THRESHOLD {
            return (*canonical).to_string();
        }
    }

    trimmed.to_string()
}

/// Normalized closeness score in `[0, 1]`: `(max_len - distance) / max_len`.
fn similarity(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Classic dynamic-programming edit distance over characters (so non-ASCII
/// text is counted per character, not per byte).
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (j, bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, ac) in a.iter().enumerate() {
            let substitution = prev[i] + usize::from(ac != bc);
            curr[i + 1] = substitution.min(prev[i + 1] + 1).min(curr[i] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_variant_hits() {
        assert_eq!(normalize_category("Resturants"), "restaurant");
        assert_eq!(normalize_category("Gas/Auto"), "gas");
        assert_eq!(normalize_category("Medical/Health"), "medical");
        assert_eq!(normalize_category("Fun / Night out"), "entertainment");
        assert_eq!(normalize_category("Misc."), "miscellaneous");
        assert_eq!(normalize_category("  utilities  "), "utilities");
    }

    #[test]
    fn fuzzy_match_just_above_threshold() {
        // "resturant" vs "restaurant": distance 1 over length 10 -> 0.9.
        // (Also an exact variant; the distance itself is what we check.)
        assert_eq!(levenshtein("resturant", "restaurant"), 1);
        assert!(similarity("resturant", "restaurant") > SIMILARITY_THRESHOLD);
        // Not in the variant table, still one edit away.
        assert_eq!(normalize_category("restaurent"), "restaurant");
    }

    #[test]
    fn exactly_at_threshold_does_not_match() {
        // Adjacent transposition costs 2 plain edits: 8/10 = 0.8 exactly.
        assert_eq!(levenshtein("restuarant", "restaurant"), 2);
        assert!((similarity("restuarant", "restaurant") - 0.8).abs() < 1e-9);
        assert_eq!(normalize_category("restuarant"), "restuarant");
    }

    #[test]
    fn unrelated_word_passes_through() {
        assert_eq!(normalize_category("Gym"), "Gym");
        assert_eq!(normalize_category("Travel"), "Travel");
        assert_eq!(normalize_category("zzzzzzzzzz"), "zzzzzzzzzz");
    }

    #[test]
    fn passthrough_keeps_original_casing_but_trims() {
        assert_eq!(normalize_category("  Dog Walking  "), "Dog Walking");
    }

    #[test]
    fn non_ascii_distance_counts_characters() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("ügym", "gym"), 1);
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }
}
