//! View model for the gallery page

use gallery_storage::image_record::ImageRecord;
use serde::Serialize;

/// Number of images per row in the gallery layout
pub const FLEX_NUM: usize = 4;

/// Attributes of one image tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTag {
    /// Link target, the original image
    pub href: String,
    /// Thumbnail source, the resized image
    pub img_src: String,
    /// Alt text, the file name
    pub alt: String,
}

/// Everything the page template needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageModel {
    /// Tiles, newest first
    pub items: Vec<ViewTag>,
    /// Images per row
    pub flex_num: usize,
}

impl PageModel {
    /// Builds the page model from records that are already in display order
    #[must_use]
    pub fn from_records(records: &[ImageRecord], base_url: &str) -> Self {
        Self {
            items: create_view_tags(records, base_url),
            flex_num: FLEX_NUM,
        }
    }
}

/// Projects records to view tags, prefixing object keys with `base_url`
#[must_use]
pub fn create_view_tags(records: &[ImageRecord], base_url: &str) -> Vec<ViewTag> {
    records
        .iter()
        .map(|record| ViewTag {
            href: format!("{base_url}{}", record.org_path),
            img_src: format!("{base_url}{}", record.resized_file_path),
            alt: record.file_name.clone(),
        })
        .collect()
}

/// Sorts records by creation time, newest first
///
/// The sort is stable: records created at the same instant keep their store order.
pub fn sort_newest_first(records: &mut [ImageRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
