use tracing::debug;

use crate::model::{CircleRecord, SnsField};
use crate::parse::line::split_line;

/// Column names that mark the first line as a header when any of them shows
/// up among its lower-cased cells.
const HEADER_KEYWORDS: [&str; 9] = [
    "name", "space", "sns", "cat", "type", "thumb", "cut", "kana", "pn",
];

/// A row with this many cells or more is legacy-shaped: the modern schema
/// tops out at 7 meaningful columns, so 12+ is an unambiguous discriminant.
const LEGACY_MIN_CELLS: usize = 12;

/// Parse a raw CSV blob into circle records, in source row order.
///
/// Blank lines are dropped, a header line is auto-detected, and each data row
/// is dispatched to the legacy (≥12 column) or modern (7 column) mapping.
/// Rows are never rejected; missing trailing cells default to empty strings.
pub fn parse(text: &str) -> Vec<CircleRecord> {
    let lines: Vec<&str> = text
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    let start = if is_header(lines[0]) { 1 } else { 0 };

    let records: Vec<CircleRecord> = lines[start..]
        .iter()
        .map(|line| {
            let cells = split_line(line);
            if cells.len() >= LEGACY_MIN_CELLS {
                map_legacy(&cells)
            } else {
                map_modern(&cells)
            }
        })
        .collect();

    debug!(
        rows = records.len(),
        header = start == 1,
        "parsed circle csv"
    );
    records
}

fn is_header(first_line: &str) -> bool {
    split_line(first_line)
        .iter()
        .any(|cell| HEADER_KEYWORDS.contains(&cell.to_lowercase().as_str()))
}

fn cell<'a>(cells: &'a [String], idx: usize) -> &'a str {
    cells.get(idx).map(String::as_str).unwrap_or_default()
}

/// Legacy layout: name, pn, space, type, cut, then one column per SNS
/// service (x, pixiv, booth, web, instagram, bluesky, tumblr). The single
/// cut image doubles as the thumbnail, and no phonetic key exists.
fn map_legacy(cells: &[String]) -> CircleRecord {
    let sns_cells: Vec<&str> = (5..12).map(|i| cell(cells, i)).collect();
    CircleRecord {
        name: cell(cells, 0).to_string(),
        pn: cell(cells, 1).to_string(),
        space: cell(cells, 2).to_string(),
        cat: cell(cells, 3).to_string(),
        thumb: cell(cells, 4).to_string(),
        cut: cell(cells, 4).to_string(),
        kana: String::new(),
        sns: SnsField::legacy_mapping(&sns_cells),
    }
}

/// Modern layout: name, pn, space, cat, thumb, kana, sns. The sns cell is
/// kept raw; the view layer decides how to break it apart.
fn map_modern(cells: &[String]) -> CircleRecord {
    CircleRecord {
        name: cell(cells, 0).to_string(),
        pn: cell(cells, 1).to_string(),
        space: cell(cells, 2).to_string(),
        cat: cell(cells, 3).to_string(),
        thumb: cell(cells, 4).to_string(),
        cut: String::new(),
        kana: cell(cells, 5).to_string(),
        sns: SnsField::Raw(cell(cells, 6).to_string()),
    }
}
