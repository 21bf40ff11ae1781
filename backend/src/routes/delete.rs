use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{FormRejection, QueryRejection},
        FromRequest, Multipart, Query, Request,
    },
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Extension, Form,
};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::gallery::Gallery;

/// Form field holding the file name of the image to delete
const DELETE_FIELD: &str = "del";

/// Errors reading the delete form
#[derive(Debug, Error)]
enum DeleteFormError {
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Form(#[from] FormRejection),
    #[error(transparent)]
    Multipart(#[from] MultipartRejection),
    #[error(transparent)]
    MultipartField(#[from] MultipartError),
}

/// Permanent redirect back to the gallery
fn redirect_to_index() -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")]).into_response()
}

fn first_value(pairs: Vec<(String, String)>, field: &str) -> Option<String> {
    pairs
        .into_iter()
        .find_map(|(name, value)| (name == field).then_some(value))
}

/// First value of `field` from the query string or a form body
///
/// A url-encoded body takes precedence over the query; multipart values come after it.
/// Bodies of any other content type are ignored, as are file parts.
async fn form_value(request: Request, field: &str) -> Result<Option<String>, DeleteFormError> {
    let Query(query) = Query::<Vec<(String, String)>>::try_from_uri(request.uri())?;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(body) = Form::<Vec<(String, String)>>::from_request(request, &()).await?;
        return Ok(first_value(body, field).or_else(|| first_value(query, field)));
    }

    let query_value = first_value(query, field);
    if query_value.is_some() || !content_type.starts_with("multipart/form-data") {
        return Ok(query_value);
    }

    let mut multipart = Multipart::from_request(request, &()).await?;
    while let Some(part) = multipart.next_field().await? {
        let matches = part.name() == Some(field) && part.file_name().is_none();
        if matches {
            return Ok(Some(part.text().await?));
        }
    }

    Ok(None)
}

/// Deletes the image named by the `del` form field, then redirects to the gallery
///
/// Only POST deletes anything. The response is the same redirect whatever happens; failures
/// are logged.
#[instrument(skip(gallery, request))]
pub async fn handler(
    method: Method,
    Extension(gallery): Extension<Arc<Gallery>>,
    request: Request,
) -> Response {
    if method != Method::POST {
        return redirect_to_index();
    }

    let file_name = match form_value(request, DELETE_FIELD).await {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!("Rejected delete form: {e}");
            return redirect_to_index();
        }
    };

    let records = match gallery.assemble_index().await {
        Ok((records, _)) => records,
        Err(e) => {
            error!("Failed to load image records for delete: {e}");
            return redirect_to_index();
        }
    };

    match gallery.delete_images(&records, &[file_name]).await {
        Ok(summary) => info!(
            deleted = ?summary.deleted,
            not_found = ?summary.not_found,
            "Delete request handled"
        ),
        Err(e) => error!("Failed to delete image: {e}"),
    }

    redirect_to_index()
}
