use anyhow::Result;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

use match_monitor::config::Config;
use match_monitor::scrapers::{BongdanetScraper, MatchScraper};
use match_monitor::storage::{SqliteStorage, Storage};
use match_monitor::utils;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("match_monitor=info".parse()?),
        )
        .init();

    info!("Starting Match Monitor");

    // Load configuration
    let config = Arc::new(Config::load()?);

    // Initialize storage
    let storage = Arc::new(SqliteStorage::new(&config.database_path).await?);
    storage.migrate().await?;

    // Initialize HTTP client with connection pooling
    let client = utils::http::create_client(&config.user_agent)?;

    let scraper = BongdanetScraper::new(config.clone());

    // Main monitoring loop
    let mut interval = interval(Duration::from_secs(config.check_interval_seconds));

    loop {
        interval.tick().await;

        info!("--- Starting new check cycle at {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));

        match scraper.scrape(&client).await {
            Ok(batch) => {
                info!(
                    "Extracted {} match records from {}",
                    batch.data.len(),
                    scraper.site_config().name
                );

                match storage.save_batch(&batch).await {
                    Ok(id) => info!("Stored batch {} ({})", id, batch.scraped_at_cst),
                    Err(e) => error!("Failed to store batch: {}", e),
                }
            }
            Err(e) => error!("Scrape cycle failed: {}", e),
        }

        info!("Check cycle completed, waiting {} seconds", config.check_interval_seconds);
    }
}
