use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::America::Chicago;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::{Config, SiteConfig};
use crate::extract::{assemble_records, RowInput};
use crate::models::{MatchRecord, ScrapeBatch};
use crate::scrapers::MatchScraper;
use crate::utils::http::fetch_with_retry;

/// Primary match rows only; their expandable detail rows use a different id
/// prefix and are filtered during assembly.
const ROW_SELECTOR: &str = "tr[id^='tb_']";

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The page loaded but carried no match rows, usually a sign the table
    /// was not server-rendered for this response.
    #[error("no match rows found on listing page")]
    NoRows,
}

pub struct BongdanetScraper {
    config: Arc<Config>,
}

impl BongdanetScraper {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MatchScraper for BongdanetScraper {
    async fn scrape(&self, client: &Client) -> Result<ScrapeBatch> {
        let site_config = self.site_config();
        info!("Scraping {}...", site_config.name);

        let response = fetch_with_retry(client, &site_config.url, 3).await?;
        let html = response.text().await?;

        let rows = collect_row_inputs(&html)?;
        info!("Found {} match rows on {}", rows.len(), site_config.name);

        Ok(stamp_batch(assemble_records(&rows)))
    }

    fn site_config(&self) -> &SiteConfig {
        &self.config.site
    }
}

/// Capture id, pass-through attributes and inner markup for every primary
/// row, in document order.
pub fn collect_row_inputs(html: &str) -> Result<Vec<RowInput>, ScrapeError> {
    let document = Html::parse_document(html);
    let row_selector = Selector::parse(ROW_SELECTOR).unwrap();

    let mut rows = Vec::new();
    for element in document.select(&row_selector) {
        let Some(row_id) = element.value().attr("id") else {
            continue;
        };
        rows.push(RowInput {
            row_id: row_id.to_string(),
            html: element.inner_html(),
            data_league: element.value().attr("data-league").map(str::to_string),
            data_index: element.value().attr("data-index").map(str::to_string),
        });
    }

    if rows.is_empty() {
        return Err(ScrapeError::NoRows);
    }
    Ok(rows)
}

/// Wrap extracted records with the two batch timestamps: a human-readable
/// label in US Central time and a UTC instant for sorting.
fn stamp_batch(data: Vec<MatchRecord>) -> ScrapeBatch {
    let scraped_at_utc = Utc::now();
    let central = scraped_at_utc.with_timezone(&Chicago);
    ScrapeBatch {
        scraped_at_cst: format!("CST {}", central.format("%a %H:%M")),
        scraped_at_utc,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LISTING: &str = "<html><body><table>\
        <tr id=\"tb_1\" data-league=\"l-1\" data-index=\"0\">\
        <td>Liga</td><td>HT</td><td>Home</td><td>1 - 0</td><td>Away</td></tr>\
        <tr id=\"tr2_1\"><td colspan=\"5\">detail</td></tr>\
        <tr id=\"tb_2\"><td>Cup</td><td>NS</td></tr>\
        </table></body></html>";

    #[test]
    fn test_collects_rows_with_attributes() {
        let rows = collect_row_inputs(LISTING).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_id, "tb_1");
        assert_eq!(rows[0].data_league.as_deref(), Some("l-1"));
        assert_eq!(rows[0].data_index.as_deref(), Some("0"));
        assert!(rows[0].html.contains("1 - 0"));
        assert_eq!(rows[1].row_id, "tb_2");
        assert_eq!(rows[1].data_league, None);
    }

    #[test]
    fn test_empty_page_is_an_error() {
        let result = collect_row_inputs("<html><body></body></html>");
        assert!(matches!(result, Err(ScrapeError::NoRows)));
    }

    #[test]
    fn test_batch_label_format() {
        let batch = stamp_batch(Vec::new());
        assert!(batch.scraped_at_cst.starts_with("CST "));
        // "CST Thu 14:07" -> weekday abbreviation plus HH:MM
        let rest = batch.scraped_at_cst.trim_start_matches("CST ");
        let parts: Vec<&str> = rest.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 3);
        assert_eq!(parts[1].len(), 5);
    }
}
