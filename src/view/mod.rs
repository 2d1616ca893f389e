//! Pure view derivation for the circle listing.
//!
//! Everything here is a function of the record list; no DOM, no HTML. A thin
//! front-end adapter binds the resulting view models to whatever toolkit
//! renders the page.

pub mod filter;
pub mod kana;
pub mod sns;
pub mod sort;

use crate::model::CircleRecord;
use filter::Filter;
use sns::{links_for, SnsLink};
use sort::{sorted_by_kana, sorted_by_space};

/// Placeholder shown when a record has neither thumb nor cut image.
pub const NO_IMAGE: &str = "assets/img/noimage.png";

/// Card count above which the adapter offers a "load more" control.
pub const LOAD_MORE_THRESHOLD: usize = 20;

/// The three interchangeable presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// 50-on ordering, card grid.
    Kana,
    /// Space ordering, card grid.
    Space,
    /// Space ordering, plain table; never filtered.
    Table,
}

/// One card in the grid view.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub space: String,
    pub pn: String,
    pub thumb: String,
    pub sns: Vec<SnsLink>,
}

impl CardView {
    fn from_record(record: &CircleRecord) -> Self {
        let thumb = [&record.thumb, &record.cut]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| NO_IMAGE.to_string());
        CardView {
            name: record.name.clone(),
            space: record.space.clone(),
            pn: record.pn.clone(),
            thumb,
            sns: links_for(&record.sns),
        }
    }
}

/// The table view: fixed headers, one row of plain strings per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: [&'static str; 4],
    pub rows: Vec<[String; 4]>,
}

pub const TABLE_HEADERS: [&str; 4] = ["スペース", "サークル名", "PN", "区分"];

/// What the adapter renders for one state of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    CardGrid { cards: Vec<CardView>, load_more: bool },
    Table(TableView),
}

/// The page's one piece of state: current mode plus the active sub-filter.
///
/// Owned by whoever drives the UI and threaded through `render` explicitly,
/// instead of living in module globals.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub mode: ViewMode,
    pub filter: Option<Filter>,
}

impl ViewState {
    pub fn new(mode: ViewMode) -> Self {
        ViewState { mode, filter: None }
    }

    pub fn with_filter(mode: ViewMode, filter: Filter) -> Self {
        ViewState {
            mode,
            filter: Some(filter),
        }
    }

    /// Derive the view model for this state from the full record list.
    pub fn render(&self, records: &[CircleRecord]) -> ViewModel {
        match self.mode {
            ViewMode::Kana | ViewMode::Space => {
                let sorted = if self.mode == ViewMode::Kana {
                    sorted_by_kana(records)
                } else {
                    sorted_by_space(records)
                };
                let visible = match self.filter {
                    Some(f) => filter::apply(&sorted, f),
                    None => sorted,
                };
                let load_more = visible.len() > LOAD_MORE_THRESHOLD;
                let cards = visible.iter().map(CardView::from_record).collect();
                ViewModel::CardGrid { cards, load_more }
            }
            // The table ignores filters: its nav buttons only scroll.
            ViewMode::Table => {
                let sorted = sorted_by_space(records);
                let rows = sorted
                    .iter()
                    .map(|r| {
                        [
                            r.space.clone(),
                            r.name.clone(),
                            r.pn.clone(),
                            r.cat.clone(),
                        ]
                    })
                    .collect();
                ViewModel::Table(TableView {
                    headers: TABLE_HEADERS,
                    rows,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnsField;
    use crate::view::filter::{Category, Filter};
    use crate::view::kana::KanaRow;

    fn rec(name: &str, kana: &str, space: &str, cat: &str) -> CircleRecord {
        CircleRecord {
            name: name.into(),
            kana: kana.into(),
            space: space.into(),
            cat: cat.into(),
            ..Default::default()
        }
    }

    #[test]
    fn card_thumb_falls_back_thumb_cut_placeholder() {
        let mut r = rec("a", "", "A-1", "");
        r.thumb = "t.png".into();
        r.cut = "c.png".into();
        assert_eq!(CardView::from_record(&r).thumb, "t.png");
        r.thumb.clear();
        assert_eq!(CardView::from_record(&r).thumb, "c.png");
        r.cut.clear();
        assert_eq!(CardView::from_record(&r).thumb, NO_IMAGE);
    }

    #[test]
    fn kana_view_sorts_and_filters() {
        let records = vec![
            rec("two", "かき", "B-1", ""),
            rec("one", "あお", "A-1", ""),
            rec("other", "さけ", "C-1", ""),
        ];
        let state = ViewState::with_filter(ViewMode::Kana, Filter::KanaRow(KanaRow::A));
        let ViewModel::CardGrid { cards, load_more } = state.render(&records) else {
            panic!("expected card grid");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "one");
        assert!(!load_more);
    }

    #[test]
    fn space_view_orders_blocks_numerically() {
        let records = vec![
            rec("b", "", "A-10", ""),
            rec("a", "", "A-2", ""),
            rec("c", "", "B-1", ""),
        ];
        let state = ViewState::new(ViewMode::Space);
        let ViewModel::CardGrid { cards, .. } = state.render(&records) else {
            panic!("expected card grid");
        };
        let spaces: Vec<&str> = cards.iter().map(|c| c.space.as_str()).collect();
        assert_eq!(spaces, vec!["A-2", "A-10", "B-1"]);
    }

    #[test]
    fn load_more_appears_past_threshold() {
        let records: Vec<CircleRecord> = (0..21)
            .map(|i| rec(&format!("c{i}"), "あ", &format!("A-{i}"), ""))
            .collect();
        let state = ViewState::new(ViewMode::Kana);
        let ViewModel::CardGrid { load_more, .. } = state.render(&records) else {
            panic!("expected card grid");
        };
        assert!(load_more);
    }

    #[test]
    fn table_view_ignores_filters_and_keeps_headers() {
        let records = vec![rec("a", "", "B-1", "企業"), rec("b", "", "A-1", "")];
        let state =
            ViewState::with_filter(ViewMode::Table, Filter::Category(Category::Corporate));
        let ViewModel::Table(table) = state.render(&records) else {
            panic!("expected table");
        };
        assert_eq!(table.headers, ["スペース", "サークル名", "PN", "区分"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["A-1".to_string(), "b".into(), "".into(), "".into()]);
    }

    #[test]
    fn cards_carry_sns_links() {
        let mut r = rec("a", "あ", "A-1", "");
        r.sns = SnsField::Raw("https://x.com/a".into());
        let card = CardView::from_record(&r);
        assert_eq!(card.sns.len(), 1);
        assert_eq!(card.sns[0].label, "X");
    }
}
