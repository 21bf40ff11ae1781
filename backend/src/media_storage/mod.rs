//! S3-based image storage operations
mod error;

use std::sync::Arc;

use aws_sdk_s3::{
    types::{Delete, ObjectIdentifier},
    Client as S3Client,
};
use tracing::{debug, error};

pub use error::{BucketError, BucketResult};

/// Image storage client for S3 operations
pub struct MediaStorage {
    s3_client: Arc<S3Client>,
    bucket_name: String,
}

impl MediaStorage {
    /// Creates a new media storage client
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket name for image storage
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>, bucket_name: String) -> Self {
        Self {
            s3_client,
            bucket_name,
        }
    }

    /// Deletes the given objects from the bucket in a single request
    ///
    /// Keys that do not exist are not reported as errors by S3.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::InvalidInput` if a request cannot be built from the keys
    /// Returns `BucketError::UpstreamError` for 5xx errors
    /// Returns `BucketError::S3Error` for other S3 service errors
    /// Returns `BucketError::PartialDelete` if S3 refused any individual key
    pub async fn delete_objects(&self, keys: &[String]) -> BucketResult<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let objects = keys
            .iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| BucketError::InvalidInput(e.to_string()))?;

        let delete = Delete::builder()
            .set_objects(Some(objects))
            .quiet(true)
            .build()
            .map_err(|e| BucketError::InvalidInput(e.to_string()))?;

        let response = self
            .s3_client
            .delete_objects()
            .bucket(&self.bucket_name)
            .delete(delete)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to delete objects in {}: {e}", self.bucket_name);
                BucketError::from(e)
            })?;

        let failed: Vec<String> = response
            .errors()
            .iter()
            .map(|err| {
                format!(
                    "{} ({})",
                    err.key().unwrap_or_default(),
                    err.message().unwrap_or_default()
                )
            })
            .collect();

        if !failed.is_empty() {
            return Err(BucketError::PartialDelete(failed));
        }

        debug!("Deleted {:?} from {}", keys, self.bucket_name);
        Ok(())
    }
}
