//! Image record storage against LocalStack
//!
//! Start LocalStack on port 4566 and run with `cargo test -p gallery_storage -- --ignored`.

use std::sync::Arc;
use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use chrono::{TimeZone, Utc};
use gallery_storage::image_record::{ImageRecord, ImageRecordAttribute, ImageRecordStorage};
use pretty_assertions::assert_eq;
use uuid::Uuid;

/// Test configuration for LocalStack
const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
const TEST_REGION: &str = "us-east-1";

/// Test context that automatically cleans up the table on drop
struct TestContext {
    storage: ImageRecordStorage,
    table_name: String,
    dynamodb_client: Arc<DynamoDbClient>,
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let client = self.dynamodb_client.clone();
        let table = self.table_name.clone();

        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = client.delete_table().table_name(&table).send().await;
            });
        }
    }
}

/// Creates a test setup with a unique table
async fn setup_test() -> TestContext {
    let table_name = format!("test-image-records-{}", Uuid::new_v4());

    let credentials = Credentials::from_keys("test", "test", None);
    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .region(Region::new(TEST_REGION))
        .credentials_provider(credentials)
        .load()
        .await;

    let dynamodb_client = Arc::new(DynamoDbClient::new(&config));

    dynamodb_client
        .create_table()
        .table_name(&table_name)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(ImageRecordAttribute::FileName.to_string())
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(ImageRecordAttribute::FileName.to_string())
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .expect("Failed to create test table");

    tokio::time::sleep(Duration::from_millis(100)).await;

    let storage = ImageRecordStorage::new(dynamodb_client.clone(), table_name.clone());

    TestContext {
        storage,
        table_name,
        dynamodb_client,
    }
}

fn create_test_record(file_name: &str, minute: u32) -> ImageRecord {
    ImageRecord {
        file_name: file_name.to_string(),
        org_path: format!("orig/{file_name}"),
        resized_file_path: format!("resized/{file_name}"),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_put_and_get_all() {
    let context = setup_test().await;

    let cat = create_test_record("cat.jpg", 1);
    let dog = create_test_record("dog.jpg", 2);

    context.storage.put(&cat).await.expect("Failed to put cat");
    context.storage.put(&dog).await.expect("Failed to put dog");

    let mut records = context.storage.get_all().await.expect("Failed to scan");
    records.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    assert_eq!(records, vec![cat, dog]);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_get_all_on_empty_table() {
    let context = setup_test().await;

    let records = context.storage.get_all().await.expect("Failed to scan");
    assert!(records.is_empty());
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_put_replaces_record_with_same_file_name() {
    let context = setup_test().await;

    context
        .storage
        .put(&create_test_record("cat.jpg", 1))
        .await
        .expect("Failed to put first version");

    let mut replacement = create_test_record("cat.jpg", 9);
    replacement.resized_file_path = "thumbs/cat.jpg".to_string();
    context
        .storage
        .put(&replacement)
        .await
        .expect("Failed to put second version");

    let records = context.storage.get_all().await.expect("Failed to scan");
    assert_eq!(records, vec![replacement]);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_delete_removes_only_target() {
    let context = setup_test().await;

    let stored = context
        .storage
        .put_all(&[
            create_test_record("cat.jpg", 1),
            create_test_record("dog.jpg", 2),
        ])
        .await;
    assert_eq!(stored, 2);

    context
        .storage
        .delete("cat.jpg")
        .await
        .expect("Failed to delete");

    let records = context.storage.get_all().await.expect("Failed to scan");
    assert_eq!(records, vec![create_test_record("dog.jpg", 2)]);

    // Deleting a missing key is a no-op
    context
        .storage
        .delete("cat.jpg")
        .await
        .expect("Deleting a missing record should succeed");
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_get_all_follows_pagination() {
    let context = setup_test().await;

    // Padding makes each item large enough that the scan spans several 1 MB pages
    let padding = "x".repeat(100 * 1024);
    let records: Vec<ImageRecord> = (0..15)
        .map(|i| {
            let mut record = create_test_record(&format!("img-{i:02}.jpg"), i);
            record.org_path = format!("orig/{padding}/{i}");
            record
        })
        .collect();

    assert_eq!(context.storage.put_all(&records).await, records.len());

    let scanned = context.storage.get_all().await.expect("Failed to scan");
    assert_eq!(scanned.len(), records.len());
}
