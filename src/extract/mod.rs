pub mod cells;
pub mod odds;
pub mod row;
pub mod teams;

pub use cells::{parse_row_fragment, RowCells};
pub use odds::parse_odds_cell;
pub use row::{extract_row_payload, RowPayload};
pub use teams::{resolve_teams, TeamNames};

use crate::models::MatchRecord;

/// Detail rows carry supplementary data for the primary row above them and
/// never appear in the extracted dataset.
pub const DETAIL_ROW_PREFIX: &str = "tr2_";

/// Raw per-row input handed over by the page-level collaborator.
#[derive(Debug, Clone)]
pub struct RowInput {
    pub row_id: String,
    pub html: String,
    pub data_league: Option<String>,
    pub data_index: Option<String>,
}

/// Run the extractor over every row, preserving input order. Rows with a
/// detail-row id are dropped regardless of their content; identity
/// attributes pass through verbatim.
pub fn assemble_records(rows: &[RowInput]) -> Vec<MatchRecord> {
    rows.iter()
        .filter(|row| !row.row_id.starts_with(DETAIL_ROW_PREFIX))
        .map(|row| {
            let payload = extract_row_payload(&row.html);
            MatchRecord {
                competition: payload.competition,
                time_or_status: payload.time_or_status,
                home_team: payload.home_team,
                score: payload.score,
                away_team: payload.away_team,
                odds: payload.odds,
                row_id: row.row_id.clone(),
                data_league: row.data_league.clone(),
                data_index: row.data_index.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(row_id: &str, html: &str) -> RowInput {
        RowInput {
            row_id: row_id.to_string(),
            html: html.to_string(),
            data_league: None,
            data_index: None,
        }
    }

    #[test]
    fn test_detail_rows_filtered() {
        let rows = vec![
            input("tb_1", "<td>Liga</td><td>NS</td>"),
            input("tr2_1", "<td>Liga</td><td>NS</td>"),
            input("tb_2", "<td>Cup</td><td>HT</td>"),
        ];
        let records = assemble_records(&rows);
        let ids: Vec<&str> = records.iter().map(|r| r.row_id.as_str()).collect();
        assert_eq!(ids, vec!["tb_1", "tb_2"]);
    }

    #[test]
    fn test_detail_row_dropped_regardless_of_content() {
        let rows = vec![input(
            "tr2_9",
            "<td>Liga</td><td>90</td><td>Home</td><td>1 - 0</td><td>Away</td>",
        )];
        assert!(assemble_records(&rows).is_empty());
    }

    #[test]
    fn test_attributes_pass_through_verbatim() {
        let rows = vec![RowInput {
            row_id: "tb_42".to_string(),
            html: "<td>Liga</td><td>NS</td>".to_string(),
            data_league: Some("l-77".to_string()),
            data_index: Some("3".to_string()),
        }];
        let records = assemble_records(&rows);
        assert_eq!(records[0].row_id, "tb_42");
        assert_eq!(records[0].data_league.as_deref(), Some("l-77"));
        assert_eq!(records[0].data_index.as_deref(), Some("3"));
    }

    #[test]
    fn test_input_order_preserved() {
        let rows: Vec<RowInput> = (0..5)
            .map(|i| input(&format!("tb_{i}"), "<td>Liga</td><td>NS</td>"))
            .collect();
        let records = assemble_records(&rows);
        let ids: Vec<String> = records.iter().map(|r| r.row_id.clone()).collect();
        assert_eq!(ids, vec!["tb_0", "tb_1", "tb_2", "tb_3", "tb_4"]);
    }
}
