use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

use crate::config::SiteConfig;
use crate::models::ScrapeBatch;

mod bongdanet;

pub use bongdanet::{collect_row_inputs, BongdanetScraper, ScrapeError};

#[async_trait]
pub trait MatchScraper: Send + Sync {
    async fn scrape(&self, client: &Client) -> Result<ScrapeBatch>;
    fn site_config(&self) -> &SiteConfig;
}
