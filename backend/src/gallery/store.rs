//! Store seams used by the gallery workflow

use gallery_storage::image_record::{ImageRecord, ImageRecordStorage, ImageRecordStorageResult};

use crate::media_storage::{BucketResult, MediaStorage};

/// Table of image records, keyed by file name
#[async_trait::async_trait]
pub trait MetadataStore: Send + Sync {
    /// Fetches every record in the table, in store order
    async fn fetch_all(&self) -> ImageRecordStorageResult<Vec<ImageRecord>>;

    /// Deletes the record with the given file name
    async fn delete_by_key(&self, file_name: &str) -> ImageRecordStorageResult<()>;
}

/// Bucket holding the image files
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Deletes all given keys in one request
    async fn delete_objects(&self, keys: &[String]) -> BucketResult<()>;
}

#[async_trait::async_trait]
impl MetadataStore for ImageRecordStorage {
    async fn fetch_all(&self) -> ImageRecordStorageResult<Vec<ImageRecord>> {
        self.get_all().await
    }

    async fn delete_by_key(&self, file_name: &str) -> ImageRecordStorageResult<()> {
        self.delete(file_name).await
    }
}

#[async_trait::async_trait]
impl ObjectStore for MediaStorage {
    async fn delete_objects(&self, keys: &[String]) -> BucketResult<()> {
        MediaStorage::delete_objects(self, keys).await
    }
}
