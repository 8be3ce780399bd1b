//! Header text helpers.

use std::collections::BTreeMap;

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;

/// Minimum Jaro-Winkler similarity for an alias to be offered as a suggestion.
const SUGGESTION_MIN_SIMILARITY: f64 = 0.85;

/// Canonical name whose alias is most similar to `key`, if any is close enough.
pub fn closest_alias<'a>(key: &str, aliases: &'a BTreeMap<String, String>) -> Option<&'a str> {
    let mut best: Option<(f64, &str)> = None;
    for (variant, canonical) in aliases {
        let score = jaro_similarity(key.chars(), variant.chars());
        if score < SUGGESTION_MIN_SIMILARITY {
            continue;
        }
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, canonical.as_str()));
        }
    }
    best.map(|(_, canonical)| canonical)
}
