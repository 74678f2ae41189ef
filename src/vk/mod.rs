//! VK API module
//!
//! Talks to the vk.com `docs.search` endpoint. One request per
//! invocation with a fixed page size; results beyond the page are
//! dropped, matching the API's own truncation.

pub mod errors;
pub mod search;
pub mod types;

pub use errors::VkError;
pub use search::{search_docs, API_BASE_URL, API_VERSION, SEARCH_PAGE_SIZE};
