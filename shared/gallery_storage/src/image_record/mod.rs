//! Image record storage integration using Dynamo DB
//!
//! Every uploaded image has one record in the table, keyed by its file name. Records are
//! written by the upload pipeline and read or deleted by the gallery.

mod error;

use std::sync::Arc;

use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoDbClient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};

pub use error::{ImageRecordStorageError, ImageRecordStorageResult};

/// Attribute names for the image record table
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "PascalCase")]
pub enum ImageRecordAttribute {
    /// File name (Primary Key)
    FileName,
    /// Object key of the original upload
    OrgPath,
    /// Object key of the resized copy
    ResizedFilePath,
    /// Creation time (RFC 3339)
    CreatedAt,
}

/// Metadata describing one uploaded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecord {
    /// File name (Primary Key)
    pub file_name: String,
    /// Object key of the original upload
    pub org_path: String,
    /// Object key of the resized copy
    pub resized_file_path: String,
    /// When the image was uploaded
    pub created_at: DateTime<Utc>,
}

/// Image record storage client for Dynamo DB operations
pub struct ImageRecordStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl ImageRecordStorage {
    /// Creates a new image record storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured Dynamo DB client
    /// * `table_name` - Dynamo DB table name for image records
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Name of the backing table
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Gets every image record in the table
    ///
    /// Follows scan pagination until the table is exhausted. Records come back in the order
    /// Dynamo DB returns them.
    ///
    /// # Errors
    ///
    /// Returns `ImageRecordStorageError` if the Dynamo DB operation fails or an item cannot be
    /// parsed
    pub async fn get_all(&self) -> ImageRecordStorageResult<Vec<ImageRecord>> {
        let mut records = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let response = self
                .dynamodb_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            for item in response.items() {
                let record = serde_dynamo::from_item(item.clone())
                    .map_err(|e| ImageRecordStorageError::ParseRecordError(e.to_string()))?;
                records.push(record);
            }

            match response.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }

        debug!(
            "Scanned {} image records from {}",
            records.len(),
            self.table_name
        );

        Ok(records)
    }

    /// Deletes the image record with the given file name
    ///
    /// Deleting a file name that has no record is not an error.
    ///
    /// # Errors
    ///
    /// Returns `ImageRecordStorageError` if the Dynamo DB operation fails
    pub async fn delete(&self, file_name: &str) -> ImageRecordStorageResult<()> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                ImageRecordAttribute::FileName.to_string(),
                AttributeValue::S(file_name.to_string()),
            )
            .send()
            .await?;

        Ok(())
    }

    /// Puts an image record, replacing any record with the same file name
    ///
    /// # Errors
    ///
    /// Returns `ImageRecordStorageError` if serialization or the Dynamo DB operation fails
    pub async fn put(&self, record: &ImageRecord) -> ImageRecordStorageResult<()> {
        let item = serde_dynamo::to_item(record)
            .map_err(|e| ImageRecordStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        Ok(())
    }

    /// Puts a batch of image records one by one
    ///
    /// A record that fails is logged and skipped. Returns how many records were stored.
    pub async fn put_all(&self, records: &[ImageRecord]) -> usize {
        let mut stored = 0;
        for record in records {
            match self.put(record).await {
                Ok(()) => stored += 1,
                Err(e) => warn!("Failed to put image record {}: {e}", record.file_name),
            }
        }
        stored
    }
}
