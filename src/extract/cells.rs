use scraper::{ElementRef, Html, Selector};

use crate::parsers::{element_text, normalize_score};

/// Parse one row's inner markup into a fragment. Body-context fragment
/// parsing drops orphan `td` tags entirely, so the row gets its table
/// context restored first.
pub fn parse_row_fragment(row_html: &str) -> Html {
    Html::parse_fragment(&format!("<table><tbody><tr>{row_html}</tr></tbody></table>"))
}

/// Ordered view over the `td` cells of one row.
///
/// Some rows carry a decorative leading blank cell which would shift every
/// fixed-position lookup by one column; `base_offset` compensates. A row
/// whose competition name is genuinely empty produces the same first-two-cell
/// pattern and is treated identically (the source markup does not
/// disambiguate the two).
pub struct RowCells<'a> {
    cells: Vec<ElementRef<'a>>,
    texts: Vec<String>,
    base_offset: usize,
}

impl<'a> RowCells<'a> {
    pub fn new(fragment: &'a Html) -> Self {
        let td_selector = Selector::parse("td").unwrap();
        let cells: Vec<ElementRef> = fragment.select(&td_selector).collect();
        let texts: Vec<String> = cells.iter().map(element_text).collect();
        let base_offset = if texts.len() >= 2 && texts[0].is_empty() && !texts[1].is_empty() {
            1
        } else {
            0
        };
        Self { cells, texts, base_offset }
    }

    pub fn base_offset(&self) -> usize {
        self.base_offset
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text of the cell at `base_offset + logical`. Out-of-range lookups are
    /// an absence, not an error.
    pub fn text_at(&self, logical: usize) -> Option<&str> {
        self.texts.get(self.base_offset + logical).map(String::as_str)
    }

    /// Text at an absolute cell index, ignoring the offset. Used for lookups
    /// anchored to another cell's position rather than to the column layout.
    pub fn raw_text_at(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }

    /// First cell in document order whose text is exactly an "int - int"
    /// pair, skipping the odds cell (its handicap lines would match).
    /// Returns the normalized score and the cell's absolute index.
    pub fn locate_score(&self, exclude: Option<ElementRef>) -> Option<(String, usize)> {
        let excluded_id = exclude.map(|el| el.id());
        for (index, cell) in self.cells.iter().enumerate() {
            if Some(cell.id()) == excluded_id {
                continue;
            }
            if let Some(score) = normalize_score(&self.texts[index]) {
                return Some((score, index));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_offset_detected_for_leading_blank_cell() {
        let fragment = parse_row_fragment("<td></td><td>Premier League</td><td>90</td>");
        let cells = RowCells::new(&fragment);
        assert_eq!(cells.base_offset(), 1);
        assert_eq!(cells.text_at(0), Some("Premier League"));
        assert_eq!(cells.text_at(1), Some("90"));
    }

    #[test]
    fn test_no_offset_without_blank_cell() {
        let fragment = parse_row_fragment("<td>Serie A</td><td>HT</td>");
        let cells = RowCells::new(&fragment);
        assert_eq!(cells.base_offset(), 0);
        assert_eq!(cells.text_at(0), Some("Serie A"));
    }

    #[test]
    fn test_no_offset_when_both_leading_cells_blank() {
        let fragment = parse_row_fragment("<td></td><td></td><td>x</td>");
        let cells = RowCells::new(&fragment);
        assert_eq!(cells.base_offset(), 0);
    }

    #[test]
    fn test_out_of_range_is_absent() {
        let fragment = parse_row_fragment("<td>only</td>");
        let cells = RowCells::new(&fragment);
        assert_eq!(cells.text_at(5), None);
        assert_eq!(cells.raw_text_at(1), None);
    }

    #[test]
    fn test_empty_row() {
        let fragment = parse_row_fragment("");
        let cells = RowCells::new(&fragment);
        assert!(cells.is_empty());
        assert_eq!(cells.base_offset(), 0);
        assert_eq!(cells.text_at(0), None);
    }

    #[test]
    fn test_locate_score_first_match_wins() {
        let fragment =
            parse_row_fragment("<td>Liga</td><td>Home</td><td>2 - 1</td><td>1 - 1</td>");
        let cells = RowCells::new(&fragment);
        let (score, index) = cells.locate_score(None).unwrap();
        assert_eq!(score, "2 - 1");
        assert_eq!(index, 2);
    }

    #[test]
    fn test_locate_score_skips_odds_cell() {
        let fragment =
            parse_row_fragment("<td class=\"oddstd\">0 - 1</td><td>Home</td><td>3 - 2</td>");
        let odds_selector = Selector::parse("td.oddstd").unwrap();
        let odds_cell = fragment.select(&odds_selector).next();
        let cells = RowCells::new(&fragment);
        let (score, index) = cells.locate_score(odds_cell).unwrap();
        assert_eq!(score, "3 - 2");
        assert_eq!(index, 2);
    }

    #[test]
    fn test_locate_score_none_when_absent() {
        let fragment = parse_row_fragment("<td>Home</td><td>Away</td>");
        let cells = RowCells::new(&fragment);
        assert_eq!(cells.locate_score(None), None);
    }
}
