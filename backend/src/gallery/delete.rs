//! Deleting images from the bucket and the record table

use gallery_storage::image_record::ImageRecord;
use tracing::{info, warn};

use super::store::{MetadataStore, ObjectStore};
use super::{GalleryError, GalleryResult};

/// Outcome of a successful delete request
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeleteSummary {
    /// File names whose objects and record were deleted
    pub deleted: Vec<String>,
    /// File names that matched no record and were skipped
    pub not_found: Vec<String>,
}

/// Returns the record with the given file name
#[must_use]
pub fn search_item<'a>(records: &'a [ImageRecord], file_name: &str) -> Option<&'a ImageRecord> {
    records.iter().find(|record| record.file_name == file_name)
}

/// Deletes each named image: both objects first, then its record
///
/// Names missing from `records` are logged and skipped. The first store failure aborts the
/// remaining names. If the record delete fails after the objects are gone, the record is
/// left behind; nothing is rolled back.
///
/// # Errors
///
/// Returns `GalleryError::StorageDelete` if the object delete fails, in which case the record
/// is not touched, and `GalleryError::MetadataDelete` if the record delete fails
pub async fn delete_images(
    object_store: &dyn ObjectStore,
    metadata_store: &dyn MetadataStore,
    records: &[ImageRecord],
    file_names: &[String],
) -> GalleryResult<DeleteSummary> {
    let mut summary = DeleteSummary::default();

    for file_name in file_names {
        let Some(target) = search_item(records, file_name) else {
            warn!("No image record for {file_name:?}, skipping");
            summary.not_found.push(file_name.clone());
            continue;
        };

        let keys = [target.org_path.clone(), target.resized_file_path.clone()];
        object_store
            .delete_objects(&keys)
            .await
            .map_err(|source| GalleryError::StorageDelete {
                file_name: file_name.clone(),
                source,
            })?;

        metadata_store
            .delete_by_key(file_name)
            .await
            .map_err(|source| {
                warn!("Objects for {file_name} are deleted but its record remains");
                GalleryError::MetadataDelete {
                    file_name: file_name.clone(),
                    source,
                }
            })?;

        info!("Deleted image {file_name}");
        summary.deleted.push(file_name.clone());
    }

    Ok(summary)
}
