//! Image gallery web service
//!
//! Lists images recorded in a Dynamo DB table, renders them as an HTML gallery and deletes
//! an image from both the S3 bucket and the table on request.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Listing, rendering and deleting images
pub mod gallery;

/// S3 image storage
pub mod media_storage;

/// HTTP routes
pub mod routes;

/// Server startup
pub mod server;

/// Settings, environment and error types
pub mod types;
