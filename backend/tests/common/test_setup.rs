use std::path::PathBuf;
use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use chrono::{TimeZone, Utc};
use backend::{
    gallery::{
        mock::{FakeMetadataStore, FakeObjectStore},
        Gallery, PageRenderer,
    },
    server,
};
use gallery_storage::image_record::ImageRecord;
use http::Method;
use tower::ServiceExt;

pub const BASE_URL: &str = "https://cdn.example.com/";

/// Setup test environment variables and tracing
pub fn setup_test_env() {
    dotenvy::from_path(".env.example").ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Path of the gallery template shipped with the repository
pub fn gallery_template() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../templates/index.html")
}

/// Record with predictable object keys, created `minute` minutes past noon
pub fn image_record(file_name: &str, minute: u32) -> ImageRecord {
    ImageRecord {
        file_name: file_name.to_string(),
        org_path: format!("orig/{file_name}"),
        resized_file_path: format!("resized/{file_name}"),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
    }
}

/// Router wired to in-memory stores
pub struct TestSetup {
    pub router: Router,
    pub metadata_store: Arc<FakeMetadataStore>,
    pub object_store: Arc<FakeObjectStore>,
}

impl TestSetup {
    pub fn new(metadata_store: FakeMetadataStore, object_store: FakeObjectStore) -> Self {
        Self::with_template(metadata_store, object_store, gallery_template())
    }

    pub fn with_template(
        metadata_store: FakeMetadataStore,
        object_store: FakeObjectStore,
        template_path: PathBuf,
    ) -> Self {
        setup_test_env();

        let metadata_store = Arc::new(metadata_store);
        let object_store = Arc::new(object_store);

        let gallery = Arc::new(Gallery::new(
            metadata_store.clone(),
            object_store.clone(),
            PageRenderer::new(template_path),
            BASE_URL.to_string(),
        ));

        Self {
            router: server::router(gallery),
            metadata_store,
            object_store,
        }
    }

    pub async fn send_request(
        &self,
        method: Method,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_form(
        &self,
        route: &str,
        form: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_body(route, "application/x-www-form-urlencoded", form)
            .await
    }

    /// POSTs a single-field `multipart/form-data` body
    pub async fn send_multipart(
        &self,
        route: &str,
        field: &str,
        value: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let boundary = "gallery-test-boundary";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n--{boundary}--\r\n"
        );

        self.send_body(
            route,
            &format!("multipart/form-data; boundary={boundary}"),
            &body,
        )
        .await
    }

    pub async fn send_body(
        &self,
        route: &str,
        content_type: &str,
        body: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(Method::POST)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn read_body(response: Response) -> Result<String, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        Ok(String::from_utf8(body.to_vec())?)
    }
}
