//! Storage services for the image gallery
//!
//! This crate holds the metadata table access used by the gallery backend. Image bytes live in
//! S3 and are handled by the backend itself.

pub mod image_record;
