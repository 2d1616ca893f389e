use crate::model::CircleRecord;
use crate::view::kana::{row_key, KanaRow};

/// Category buttons shown alongside the row/block filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// 企業 — corporate booths.
    Corporate,
    /// 委託 — consignment.
    Consignment,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Corporate => "企業",
            Category::Consignment => "委託",
        }
    }
}

/// One active sub-filter. `None` at the call sites means "show everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Gojūon row (50-on view).
    KanaRow(KanaRow),
    /// Leading block letter of the space code (space view).
    SpaceBlock(char),
    /// Category tag, matched case-insensitively after trimming.
    Category(Category),
}

/// Apply a sub-filter to an already-sorted record list.
///
/// Row filters drop records that bucket to no row. Block filters match the
/// space code's first letter, case-insensitively. Category filters follow
/// the listing's long-standing rule: when no record in the set carries a
/// category at all, the button selects nothing rather than everything.
pub fn apply(records: &[CircleRecord], filter: Filter) -> Vec<CircleRecord> {
    match filter {
        Filter::KanaRow(row) => records
            .iter()
            .filter(|r| row_key(r) == Some(row))
            .cloned()
            .collect(),
        Filter::SpaceBlock(letter) => records
            .iter()
            .filter(|r| {
                r.space
                    .chars()
                    .next()
                    .is_some_and(|c| c.eq_ignore_ascii_case(&letter))
            })
            .cloned()
            .collect(),
        Filter::Category(cat) => {
            let any_categorized = records.iter().any(|r| !r.cat.trim().is_empty());
            if !any_categorized {
                return Vec::new();
            }
            records
                .iter()
                .filter(|r| r.cat.trim().eq_ignore_ascii_case(cat.label()))
                .cloned()
                .collect()
        }
    }
}
