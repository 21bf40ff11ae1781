//! Seeds the image record table from a JSON file
//!
//! Usage: `seed-records <records.json>`, where the file holds an array of records in table
//! form (`FileName`, `OrgPath`, `ResizedFilePath`, `CreatedAt`).

use std::sync::Arc;

use anyhow::Context;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use backend::types::{Environment, Settings};
use gallery_storage::image_record::{ImageRecord, ImageRecordStorage};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .context("usage: seed-records <records.json>")?;

    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let records: Vec<ImageRecord> =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {path}"))?;

    let environment = Environment::from_env();
    let settings = Settings::load(&Settings::path_from_env())?;
    let aws_config = environment.aws_config(&settings.region).await;

    let storage = ImageRecordStorage::new(
        Arc::new(DynamoDbClient::new(&aws_config)),
        settings.table_name,
    );

    let stored = storage.put_all(&records).await;
    info!(
        "Stored {stored} of {} records in {}",
        records.len(),
        storage.table_name()
    );

    Ok(())
}
