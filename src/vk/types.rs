//! Shared VK API response types

use crate::models::Doc;
use serde::Deserialize;

/// Top-level `docs.search` envelope. Exactly one of `response` or
/// `error` is populated.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    /// Search results on success
    pub response: Option<SearchResults>,
    /// API-level error on failure
    pub error: Option<ApiError>,
}

/// Successful `docs.search` payload
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    /// Total number of matches known to the server, which may exceed
    /// the number of items actually returned
    pub count: i64,
    /// Matching documents, at most one page
    pub items: Vec<Doc>,
}

/// API-level error payload
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error_code: i64,
    pub error_msg: String,
}

/// `error_code` the API uses for a rejected access token
pub const AUTHORIZATION_FAILED_CODE: i64 = 5;
