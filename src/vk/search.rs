//! Document search against the VK API

use crate::models::Doc;
use crate::vk::errors::VkError;
use crate::vk::types::{ApiEnvelope, AUTHORIZATION_FAILED_CODE};
use reqwest::Client;
use tracing::{debug, info};

pub const API_BASE_URL: &str = "https://api.vk.com/method";
pub const API_VERSION: &str = "5.68";

/// Single-page result limit. The API never returns more than one page
/// here; anything beyond it is silently dropped.
pub const SEARCH_PAGE_SIZE: u32 = 1000;

/// Search for documents matching `query`.
///
/// Issues one GET to `{base_url}/docs.search` and decodes the envelope.
/// A rejected token (API error code 5) maps to [`VkError::Authorization`],
/// which callers treat as fatal; any other API error is surfaced with
/// its code and message.
pub async fn search_docs(
    client: &Client,
    base_url: &str,
    query: &str,
    token: &str,
) -> Result<Vec<Doc>, VkError> {
    let url = format!("{}/docs.search", base_url);
    let page_size = SEARCH_PAGE_SIZE.to_string();

    debug!("Fetching document search results from: {}", url);
    let response = client
        .get(&url)
        .query(&[
            ("q", query),
            ("count", page_size.as_str()),
            ("access_token", token),
            ("v", API_VERSION),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(VkError::HttpStatus(status.as_u16()));
    }

    let envelope: ApiEnvelope = response.json().await?;

    if let Some(error) = envelope.error {
        if error.error_code == AUTHORIZATION_FAILED_CODE {
            return Err(VkError::Authorization);
        }
        return Err(VkError::Api {
            error_code: error.error_code,
            error_msg: error.error_msg,
        });
    }

    let results = envelope.response.ok_or(VkError::MalformedResponse)?;
    info!(
        "Search matched {} documents, {} returned",
        results.count,
        results.items.len()
    );
    Ok(results.items)
}
