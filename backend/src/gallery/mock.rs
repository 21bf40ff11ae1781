//! In-memory stores for tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use aws_sdk_dynamodb::error::SdkError;
use gallery_storage::image_record::{
    ImageRecord, ImageRecordStorageError, ImageRecordStorageResult,
};

use super::store::{MetadataStore, ObjectStore};
use crate::media_storage::{BucketError, BucketResult};

/// Record table backed by a vector, recording every delete
#[derive(Default)]
pub struct FakeMetadataStore {
    records: Vec<ImageRecord>,
    fail_fetch: bool,
    fail_delete: bool,
    fetch_calls: AtomicUsize,
    deleted_keys: Mutex<Vec<String>>,
}

impl FakeMetadataStore {
    /// Store returning `records` in the given order
    #[must_use]
    pub fn with_records(records: Vec<ImageRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Every fetch fails
    #[must_use]
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Every delete fails
    #[must_use]
    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Number of `fetch_all` calls so far
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Keys passed to `delete_by_key`, in call order
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned
    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted_keys.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MetadataStore for FakeMetadataStore {
    async fn fetch_all(&self) -> ImageRecordStorageResult<Vec<ImageRecord>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(ImageRecordStorageError::DynamoDbScanError(
                SdkError::construction_failure("injected scan failure"),
            ));
        }
        Ok(self.records.clone())
    }

    async fn delete_by_key(&self, file_name: &str) -> ImageRecordStorageResult<()> {
        self.deleted_keys.lock().unwrap().push(file_name.to_string());
        if self.fail_delete {
            return Err(ImageRecordStorageError::DynamoDbDeleteError(
                SdkError::construction_failure("injected delete failure"),
            ));
        }
        Ok(())
    }
}

/// Bucket that records every delete request
#[derive(Default)]
pub struct FakeObjectStore {
    fail: bool,
    delete_calls: Mutex<Vec<Vec<String>>>,
}

impl FakeObjectStore {
    /// Every delete fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Keys of each `delete_objects` call, in call order
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned
    pub fn delete_calls(&self) -> Vec<Vec<String>> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ObjectStore for FakeObjectStore {
    async fn delete_objects(&self, keys: &[String]) -> BucketResult<()> {
        self.delete_calls.lock().unwrap().push(keys.to_vec());
        if self.fail {
            return Err(BucketError::S3Error("injected delete failure".to_string()));
        }
        Ok(())
    }
}
