use scraper::{ElementRef, Selector};

use crate::models::{AhOdds, OddsBlock, OuOdds};
use crate::parsers::element_text;

/// Parse the bookmaker cell into structured AH and O/U triples.
///
/// The cell repeats up to three `.hOdds` groups; their position carries the
/// meaning: group 0 holds the home price / over price, group 1 the handicap
/// line / total line, group 2 the away price / under price. A missing cell,
/// group or sub-node leaves the corresponding leaves null, never an error.
pub fn parse_odds_cell(cell: Option<ElementRef>) -> OddsBlock {
    let Some(cell) = cell else {
        return OddsBlock::empty();
    };

    let group_selector = Selector::parse(".w-hOdds .hOdds").unwrap();
    let asia_selector = Selector::parse(".txt-asia").unwrap();
    let over_under_selector = Selector::parse(".txt-overunder").unwrap();

    let mut asia: [Option<String>; 3] = Default::default();
    let mut over_under: [Option<String>; 3] = Default::default();

    for (index, group) in cell.select(&group_selector).take(3).enumerate() {
        asia[index] = sub_node_text(group, &asia_selector);
        over_under[index] = sub_node_text(group, &over_under_selector);
    }

    let [ah_home, ah_line, ah_away] = asia;
    let [ou_over, ou_total, ou_under] = over_under;

    OddsBlock {
        ah: AhOdds { home_odds: ah_home, line: ah_line, away_odds: ah_away },
        ou: OuOdds { over_odds: ou_over, total_line: ou_total, under_odds: ou_under },
    }
}

fn sub_node_text(group: ElementRef, selector: &Selector) -> Option<String> {
    group.select(selector).next().map(|el| element_text(&el))
}
