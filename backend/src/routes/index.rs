use std::sync::Arc;

use axum::{response::Html, Extension};
use tracing::instrument;

use crate::{gallery::Gallery, types::AppError};

/// Gallery page, served for every method
///
/// Any failure is answered with a bare 500.
#[instrument(skip(gallery))]
pub async fn handler(
    Extension(gallery): Extension<Arc<Gallery>>,
) -> Result<Html<String>, AppError> {
    let html = gallery.render_index().await?;
    Ok(Html(html))
}
