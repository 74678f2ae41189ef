//! VK-specific error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VkError {
    #[error("User authorization failed: the access token was rejected")]
    Authorization,

    #[error("VK API error (code {error_code}): {error_msg}")]
    Api { error_code: i64, error_msg: String },

    #[error("docs.search returned HTTP {0}")]
    HttpStatus(u16),

    #[error("docs.search response carried neither a result nor an error")]
    MalformedResponse,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
