//! Gallery workflow: listing, rendering and deleting images

mod delete;
/// In-memory stores for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
mod page;
mod render;
mod store;

use std::sync::Arc;

use gallery_storage::image_record::{ImageRecord, ImageRecordStorageError};
use thiserror::Error;

use crate::media_storage::BucketError;

pub use delete::{delete_images, search_item, DeleteSummary};
pub use page::{create_view_tags, sort_newest_first, PageModel, ViewTag, FLEX_NUM};
pub use render::{is_div, PageRenderer, RenderError};
pub use store::{MetadataStore, ObjectStore};

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Errors that can occur in the gallery workflow
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Image records could not be fetched
    #[error("Failed to fetch image records: {0}")]
    Fetch(#[source] ImageRecordStorageError),

    /// The gallery page could not be rendered
    #[error("Failed to render gallery page: {0}")]
    Render(#[from] RenderError),

    /// The image objects could not be deleted
    #[error("Failed to delete objects of {file_name}: {source}")]
    StorageDelete {
        /// Image being deleted
        file_name: String,
        /// Bucket error
        #[source]
        source: BucketError,
    },

    /// The image record could not be deleted after its objects were
    #[error("Failed to delete record of {file_name}: {source}")]
    MetadataDelete {
        /// Image being deleted
        file_name: String,
        /// Table error
        #[source]
        source: ImageRecordStorageError,
    },
}

/// Gallery service shared by the HTTP handlers
pub struct Gallery {
    metadata_store: Arc<dyn MetadataStore>,
    object_store: Arc<dyn ObjectStore>,
    renderer: PageRenderer,
    base_url: String,
}

impl Gallery {
    /// Creates the gallery service
    ///
    /// # Arguments
    ///
    /// * `metadata_store` - Table of image records
    /// * `object_store` - Bucket of image files
    /// * `renderer` - Page template renderer
    /// * `base_url` - Prefix joined with object keys to build image URLs
    #[must_use]
    pub fn new(
        metadata_store: Arc<dyn MetadataStore>,
        object_store: Arc<dyn ObjectStore>,
        renderer: PageRenderer,
        base_url: String,
    ) -> Self {
        Self {
            metadata_store,
            object_store,
            renderer,
            base_url,
        }
    }

    /// Fetches all records, newest first, with the page model built from them
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::Fetch` if the records cannot be fetched
    pub async fn assemble_index(&self) -> GalleryResult<(Vec<ImageRecord>, PageModel)> {
        let mut records = self
            .metadata_store
            .fetch_all()
            .await
            .map_err(GalleryError::Fetch)?;

        sort_newest_first(&mut records);
        let model = PageModel::from_records(&records, &self.base_url);

        Ok((records, model))
    }

    /// Renders the gallery page
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::Fetch` or `GalleryError::Render`
    pub async fn render_index(&self) -> GalleryResult<String> {
        let (_, model) = self.assemble_index().await?;
        Ok(self.renderer.render(&model).await?)
    }

    /// Deletes the named images found in `records`
    ///
    /// # Errors
    ///
    /// Returns `GalleryError::StorageDelete` or `GalleryError::MetadataDelete`
    pub async fn delete_images(
        &self,
        records: &[ImageRecord],
        file_names: &[String],
    ) -> GalleryResult<DeleteSummary> {
        delete_images(
            self.object_store.as_ref(),
            self.metadata_store.as_ref(),
            records,
            file_names,
        )
        .await
    }
}
