//! vkloot - search and download documents from vk.com
//!
//! The pipeline is linear: search the `docs.search` API for documents
//! matching a query, filter by extension, sort newest-first, print a
//! listing with a size summary, and (with `--save`) download everything
//! through a bounded pool of concurrent workers.

pub mod auth;
pub mod cli;
pub mod config;
pub mod downloader;
pub mod models;
pub mod vk;
