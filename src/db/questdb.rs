//! QuestDB-backed price series, one table per series.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tokio_postgres::{Client, NoTls};

use crate::config;
use crate::db::PriceHistoryStore;
use crate::error::StoreError;
use crate::models::PricePoint;

pub struct QuestPriceStore {
    client: Client,
    ensured: RwLock<HashSet<String>>,
}

impl QuestPriceStore {
    /// Connect over PGWire using `QUESTDB_URL`. The connection driver runs on
    /// its own task for the life of the process.
    pub async fn connect() -> Result<Self, StoreError> {
        let questdb_url = config::get_questdb_url();
        let (client, connection) = tokio_postgres::connect(&questdb_url, NoTls)
            .await
            .map_err(StoreError::Connect)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "QuestDB connection error");
            }
        });

        Ok(Self {
            client,
            ensured: RwLock::new(HashSet::new()),
        })
    }

    /// Series names are interpolated into DDL, so they are restricted to
    /// lowercase alphanumerics, `-` and `_` before mapping to a table name.
    fn table_name(series: &str) -> Result<String, StoreError> {
        let valid = !series.is_empty()
            && series
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidSeries(series.to_string()));
        }
        Ok(series.replace('-', "_"))
    }

    async fn create_table(&self, table: &str) -> Result<(), StoreError> {
        self.client
            .execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {table} (
                        timestamp TIMESTAMP,
                        price DOUBLE
                    ) TIMESTAMP(timestamp) PARTITION BY DAY"
                ),
                &[],
            )
            .await?;
        Ok(())
    }

    /// Create the backing table once per process, then serve the cached name.
    async fn ensure_series(&self, series: &str) -> Result<String, StoreError> {
        let table = Self::table_name(series)?;
        {
            let ensured = self.ensured.read().await;
            if ensured.contains(&table) {
                return Ok(table);
            }
        }
        self.create_table(&table).await?;
        self.ensured.write().await.insert(table.clone());
        Ok(table)
    }
}

#[async_trait]
impl PriceHistoryStore for QuestPriceStore {
    async fn append(&self, series: &str, point: &PricePoint) -> Result<(), StoreError> {
        let table = self.ensure_series(series).await?;
        let timestamp_naive = point.timestamp.naive_utc();
        self.client
            .execute(
                &format!("INSERT INTO {table} (timestamp, price) VALUES ($1, $2)"),
                &[&timestamp_naive, &point.price],
            )
            .await?;
        Ok(())
    }

    async fn recent(&self, series: &str, limit: usize) -> Result<Vec<PricePoint>, StoreError> {
        let table = self.ensure_series(series).await?;
        let rows = self
            .client
            .query(
                &format!(
                    "SELECT timestamp, price FROM {table} ORDER BY timestamp DESC LIMIT {limit}"
                ),
                &[],
            )
            .await?;

        Ok(rows
            .iter()
            .map(|row| {
                let timestamp_naive: chrono::NaiveDateTime = row.get(0);
                PricePoint {
                    timestamp: DateTime::from_naive_utc_and_offset(timestamp_naive, Utc),
                    price: row.get(1),
                }
            })
            .collect())
    }

    async fn reset(&self, series: &str) -> Result<(), StoreError> {
        let table = Self::table_name(series)?;
        self.client
            .execute(&format!("DROP TABLE IF EXISTS {table}"), &[])
            .await?;
        self.create_table(&table).await?;
        self.ensured.write().await.insert(table);
        Ok(())
    }
}
