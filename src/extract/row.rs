use scraper::Selector;

use super::cells::{parse_row_fragment, RowCells};
use super::odds::parse_odds_cell;
use super::teams::resolve_teams;
use crate::models::OddsBlock;
use crate::parsers::parse_time_status;

/// Columns are positional once the base offset is applied: competition first,
/// the match clock or status token second.
const COMPETITION_INDEX: usize = 0;
const TIME_STATUS_INDEX: usize = 1;

/// Extracted fields for one row, before identity attributes are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPayload {
    pub competition: String,
    pub time_or_status: String,
    pub home_team: String,
    pub score: String,
    pub away_team: String,
    pub odds: OddsBlock,
}

/// Extract one row's fields from its inner markup.
///
/// Pure and deterministic: identical markup always yields an identical
/// payload. Missing or malformed structure degrades the affected field to
/// its empty/null form and never fails the row; a row with no cells at all
/// resolves to an all-empty payload with a fully null odds block.
pub fn extract_row_payload(row_html: &str) -> RowPayload {
    let fragment = parse_row_fragment(row_html);
    let cells = RowCells::new(&fragment);

    let competition = cells.text_at(COMPETITION_INDEX).unwrap_or_default().to_string();
    let time_or_status = parse_time_status(cells.text_at(TIME_STATUS_INDEX).unwrap_or_default());

    let odds_selector = Selector::parse("td.oddstd").unwrap();
    let odds_cell = fragment.select(&odds_selector).next();

    let (score, score_index) = match cells.locate_score(odds_cell) {
        Some((score, index)) => (score, Some(index)),
        None => (String::new(), None),
    };

    let teams = resolve_teams(&fragment, &cells, score_index);
    let odds = parse_odds_cell(odds_cell);

    RowPayload {
        competition,
        time_or_status,
        home_team: teams.home,
        score,
        away_team: teams.away,
        odds,
    }
}
