use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::CircleRecord;

/// Leading block letters plus the first number, e.g. `A-12`, `AB3`.
static SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Z]+)-?(\d+)").expect("space pattern"));

/// Sort key for 50-on ordering: kana, falling back to the display name.
///
/// NFKC-folded, katakana lowered to hiragana, ASCII lower-cased. This stands
/// in for locale-aware collation, which is more than the kana/romaji keys in
/// the data need.
pub fn kana_sort_key(record: &CircleRecord) -> String {
    let source = if record.kana.trim().is_empty() {
        record.name.trim()
    } else {
        record.kana.trim()
    };
    source
        .nfkc()
        .map(|c| {
            if ('\u{30A1}'..='\u{30FA}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Compare two space codes: block letters first (case-folded), then the
/// first number numerically, so `A-2` sorts before `A-10`. Codes that do not
/// look like block+number fall back to plain string order.
pub fn compare_space(a: &str, b: &str) -> Ordering {
    match (SPACE_RE.captures(a), SPACE_RE.captures(b)) {
        (Some(ca), Some(cb)) => {
            let block_a = ca[1].to_uppercase();
            let block_b = cb[1].to_uppercase();
            if block_a != block_b {
                return block_a.cmp(&block_b);
            }
            let num_a: u64 = ca[2].parse().unwrap_or(0);
            let num_b: u64 = cb[2].parse().unwrap_or(0);
            num_a.cmp(&num_b)
        }
        _ => a.cmp(b),
    }
}

/// Records sorted for the 50-on view.
pub fn sorted_by_kana(records: &[CircleRecord]) -> Vec<CircleRecord> {
    let mut out = records.to_vec();
    out.sort_by_cached_key(kana_sort_key);
    out
}

/// Records sorted for the space-order views.
pub fn sorted_by_space(records: &[CircleRecord]) -> Vec<CircleRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| compare_space(&a.space, &b.space));
    out
}
