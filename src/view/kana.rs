use unicode_normalization::UnicodeNormalization;

use crate::model::CircleRecord;

/// The ten gojūon rows used for grouping and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KanaRow {
    A,
    Ka,
    Sa,
    Ta,
    Na,
    Ha,
    Ma,
    Ya,
    Ra,
    Wa,
}

impl KanaRow {
    pub const ALL: [KanaRow; 10] = [
        KanaRow::A,
        KanaRow::Ka,
        KanaRow::Sa,
        KanaRow::Ta,
        KanaRow::Na,
        KanaRow::Ha,
        KanaRow::Ma,
        KanaRow::Ya,
        KanaRow::Ra,
        KanaRow::Wa,
    ];

    /// Row label as shown on the filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            KanaRow::A => "あ",
            KanaRow::Ka => "か",
            KanaRow::Sa => "さ",
            KanaRow::Ta => "た",
            KanaRow::Na => "な",
            KanaRow::Ha => "は",
            KanaRow::Ma => "ま",
            KanaRow::Ya => "や",
            KanaRow::Ra => "ら",
            KanaRow::Wa => "わ",
        }
    }

    fn members(self) -> &'static [char] {
        match self {
            KanaRow::A => &['あ', 'い', 'う', 'え', 'お'],
            KanaRow::Ka => &['か', 'き', 'く', 'け', 'こ'],
            KanaRow::Sa => &['さ', 'し', 'す', 'せ', 'そ'],
            KanaRow::Ta => &['た', 'ち', 'つ', 'て', 'と'],
            KanaRow::Na => &['な', 'に', 'ぬ', 'ね', 'の'],
            KanaRow::Ha => &['は', 'ひ', 'ふ', 'へ', 'ほ'],
            KanaRow::Ma => &['ま', 'み', 'む', 'め', 'も'],
            KanaRow::Ya => &['や', 'ゆ', 'よ'],
            KanaRow::Ra => &['ら', 'り', 'る', 'れ', 'ろ'],
            KanaRow::Wa => &['わ', 'を', 'ん'],
        }
    }

    fn from_roman(c: char) -> Option<KanaRow> {
        match c {
            'a' => Some(KanaRow::A),
            'k' => Some(KanaRow::Ka),
            's' => Some(KanaRow::Sa),
            't' => Some(KanaRow::Ta),
            'n' => Some(KanaRow::Na),
            'h' => Some(KanaRow::Ha),
            'm' => Some(KanaRow::Ma),
            'y' => Some(KanaRow::Ya),
            'r' => Some(KanaRow::Ra),
            'w' => Some(KanaRow::Wa),
            _ => None,
        }
    }

    fn from_head(c: char) -> Option<KanaRow> {
        KanaRow::ALL
            .into_iter()
            .find(|row| row.members().contains(&c))
    }
}

/// Gojūon row for a record.
///
/// A single roman letter in `kana` (the spreadsheet's shorthand: `a`, `k`,
/// `s`, …) maps straight to its row. Anything else falls back to bucketing
/// the normalized head character of `kana`, or of `name` when `kana` is
/// empty. Records that fit no row yield `None` and are excluded by row
/// filters.
pub fn row_key(record: &CircleRecord) -> Option<KanaRow> {
    let kana = record.kana.trim();
    if kana.chars().count() == 1 {
        let c = kana.chars().next()?.to_ascii_lowercase();
        if let Some(row) = KanaRow::from_roman(c) {
            return Some(row);
        }
    }

    let source = if kana.is_empty() {
        record.name.trim()
    } else {
        kana
    };
    normalize_kana_head(source).and_then(KanaRow::from_head)
}

/// Normalize the first character of `s` to its base hiragana: NFKC for
/// width/compatibility forms, NFKD to split off (han)dakuten marks, katakana
/// shifted down to hiragana, small kana widened to their base letter.
pub fn normalize_kana_head(s: &str) -> Option<char> {
    let head = s.trim().chars().next()?;
    let decomposed: String = head.to_string().nfkc().collect::<String>().nfkd().collect();
    let mut ch = decomposed.chars().next()?;

    // katakana block → hiragana block
    if ('\u{30A1}'..='\u{30FA}').contains(&ch) {
        ch = char::from_u32(ch as u32 - 0x60)?;
    }

    let base = match ch {
        'ぁ' => 'あ',
        'ぃ' => 'い',
        'ぅ' => 'う',
        'ぇ' => 'え',
        'ぉ' => 'お',
        'っ' => 'つ',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        'ゎ' => 'わ',
        other => other,
    };
    Some(base)
}
