use scraper::{Html, Selector};

use super::cells::RowCells;
use crate::parsers::{element_text, strip_rank_prefix};

/// Home team anchors carry an `ht_` id prefix, away team anchors `gt_`.
const HOME_ANCHOR_SELECTOR: &str = "a.name.data-history-ls[id^='ht_']";
const AWAY_ANCHOR_SELECTOR: &str = "a.name.data-history-ls[id^='gt_']";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamNames {
    pub home: String,
    pub away: String,
}

/// Resolve home/away names with an ordered strategy chain per side: the
/// identifying anchor first, then the cell flanking the score cell when one
/// was located. The first strategy yielding a non-empty name wins; when all
/// fail the name stays empty. Either way a leading rank number is stripped.
pub fn resolve_teams(
    fragment: &Html,
    cells: &RowCells,
    score_index: Option<usize>,
) -> TeamNames {
    let home_anchor = || anchor_text(fragment, HOME_ANCHOR_SELECTOR);
    let away_anchor = || anchor_text(fragment, AWAY_ANCHOR_SELECTOR);
    let before_score = || adjacent_cell_text(cells, score_index, -1);
    let after_score = || adjacent_cell_text(cells, score_index, 1);

    TeamNames {
        home: strip_rank_prefix(&resolve(&[&home_anchor, &before_score])),
        away: strip_rank_prefix(&resolve(&[&away_anchor, &after_score])),
    }
}

/// Run strategies in priority order, stopping at the first non-empty result.
fn resolve(strategies: &[&dyn Fn() -> Option<String>]) -> String {
    strategies
        .iter()
        .find_map(|strategy| strategy().filter(|name| !name.is_empty()))
        .unwrap_or_default()
}

fn anchor_text(fragment: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    fragment.select(&selector).next().map(|el| element_text(&el))
}

fn adjacent_cell_text(
    cells: &RowCells,
    score_index: Option<usize>,
    offset: isize,
) -> Option<String> {
    let index = score_index?.checked_add_signed(offset)?;
    cells.raw_text_at(index).map(str::to_string)
}
