//! Custom Error and Result types for this library

use thiserror::Error;

use crate::catalog::HttpCatalogFetcherBuilderError;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum StoreError {
    /// Transport failure or non-2xx response while fetching the catalog
    #[error("catalog request failed: {_0}")]
    Http(#[from] ureq::Error),

    /// Failure reading or writing session storage
    #[error("session storage error: {_0}")]
    Storage(#[from] std::io::Error),

    /// Failure encoding or decoding JSON
    #[error("json error: {_0}")]
    Json(#[from] serde_json::Error),

    /// Error resulting from failure to build the HTTP catalog fetcher
    #[error("failed to build catalog fetcher: {_0}")]
    CatalogFetcherBuild(#[from] HttpCatalogFetcherBuilderError),
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`StoreError`]
pub type Result<T> = std::result::Result<T, StoreError>;
