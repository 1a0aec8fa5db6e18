//! Price-history persistence.

pub mod questdb;

pub use questdb::QuestPriceStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::PricePoint;

/// Named, append-only price series. The store owns storage; the pipeline only
/// appends and reads, and deletes nothing except through [`reset`].
///
/// [`reset`]: PriceHistoryStore::reset
#[async_trait]
pub trait PriceHistoryStore: Send + Sync {
    async fn append(&self, series: &str, point: &PricePoint) -> Result<(), StoreError>;

    /// The newest `limit` points, most-recent-first.
    async fn recent(&self, series: &str, limit: usize) -> Result<Vec<PricePoint>, StoreError>;

    /// Drop and recreate a named series. Used by backfills.
    async fn reset(&self, series: &str) -> Result<(), StoreError>;
}
