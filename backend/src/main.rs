use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;
use backend::{
    gallery::{Gallery, PageRenderer},
    media_storage::MediaStorage,
    server,
    types::{Environment, Settings},
};
use gallery_storage::image_record::ImageRecordStorage;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Use JSON format for staging/production, regular format for development
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();
    if environment.json_logs() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let settings = Settings::load(&Settings::path_from_env())?;
    info!("Loaded settings: {settings:?}");

    let aws_config = environment.aws_config(&settings.region).await;

    let s3_client = Arc::new(S3Client::from_conf(
        environment.s3_client_config(&aws_config),
    ));
    let media_storage = Arc::new(MediaStorage::new(s3_client, settings.bucket_name.clone()));

    info!("✅ Initialized media storage");

    let dynamodb_client = Arc::new(DynamoDbClient::new(&aws_config));
    let image_records = Arc::new(ImageRecordStorage::new(
        dynamodb_client,
        settings.table_name.clone(),
    ));

    info!("✅ Initialized image record storage");

    let gallery = Arc::new(Gallery::new(
        image_records,
        media_storage,
        PageRenderer::new(&settings.tmpl_path),
        settings.base_url.clone(),
    ));

    server::start(settings.port, gallery).await
}
