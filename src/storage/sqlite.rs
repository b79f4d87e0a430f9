use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::models::{MatchRecord, ScrapeBatch};
use crate::storage::Storage;

pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub async fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)
            .context("Failed to open SQLite database")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn batch_from_columns(cst: String, utc: String, data: String) -> Result<ScrapeBatch> {
    let scraped_at_utc = DateTime::parse_from_rfc3339(&utc)
        .context("Invalid stored UTC timestamp")?
        .with_timezone(&Utc);
    let data: Vec<MatchRecord> =
        serde_json::from_str(&data).context("Invalid stored batch payload")?;
    Ok(ScrapeBatch { scraped_at_cst: cst, scraped_at_utc, data })
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "CREATE TABLE IF NOT EXISTS scrape_batches (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                scraped_at_cst TEXT NOT NULL,
                scraped_at_utc TEXT NOT NULL,
                data TEXT NOT NULL
            )",
            [],
        )?;

        // Latest-batch lookups sort on the UTC timestamp
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_scraped_at_utc ON scrape_batches(scraped_at_utc)",
            [],
        )?;

        info!("Database migration completed");
        Ok(())
    }

    async fn save_batch(&self, batch: &ScrapeBatch) -> Result<i64> {
        let data = serde_json::to_string(&batch.data)
            .context("Failed to serialize batch records")?;
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO scrape_batches (scraped_at_cst, scraped_at_utc, data)
             VALUES (?1, ?2, ?3)",
            params![&batch.scraped_at_cst, batch.scraped_at_utc.to_rfc3339(), data],
        )?;

        Ok(conn.last_insert_rowid())
    }

    async fn latest_batch(&self) -> Result<Option<ScrapeBatch>> {
        let conn = self.conn.lock().unwrap();

        let row: Option<(String, String, String)> = conn
            .query_row(
                "SELECT scraped_at_cst, scraped_at_utc, data FROM scrape_batches
                 ORDER BY scraped_at_utc DESC LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        row.map(|(cst, utc, data)| batch_from_columns(cst, utc, data))
            .transpose()
    }

    async fn batch_by_id(&self, id: i64) -> Result<Option<ScrapeBatch>> {
        let conn = self.conn.lock().unwrap();

        let row: Option<(String, String, String)> = conn
            .query_row(
                "SELECT scraped_at_cst, scraped_at_utc, data FROM scrape_batches
                 WHERE id = ?1",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        row.map(|(cst, utc, data)| batch_from_columns(cst, utc, data))
            .transpose()
    }

    async fn all_batches(&self) -> Result<Vec<ScrapeBatch>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT scraped_at_cst, scraped_at_utc, data FROM scrape_batches
             ORDER BY scraped_at_utc DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut batches = Vec::new();
        for row in rows {
            let (cst, utc, data) = row?;
            batches.push(batch_from_columns(cst, utc, data)?);
        }

        Ok(batches)
    }

    async fn clear(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();

        let deleted = conn.execute("DELETE FROM scrape_batches", [])?;
        info!("Cleared {} stored batches", deleted);
        Ok(deleted)
    }
}
