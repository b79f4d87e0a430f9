use anyhow::Result;
use async_trait::async_trait;

use crate::models::ScrapeBatch;

mod sqlite;

pub use sqlite::SqliteStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn migrate(&self) -> Result<()>;
    /// Insert a batch and return its row id.
    async fn save_batch(&self, batch: &ScrapeBatch) -> Result<i64>;
    async fn latest_batch(&self) -> Result<Option<ScrapeBatch>>;
    async fn batch_by_id(&self, id: i64) -> Result<Option<ScrapeBatch>>;
    /// All stored batches, newest first.
    async fn all_batches(&self) -> Result<Vec<ScrapeBatch>>;
    /// Delete every stored batch, returning the deleted count.
    async fn clear(&self) -> Result<usize>;
}
