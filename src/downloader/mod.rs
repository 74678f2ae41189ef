//! Concurrent fetch-and-persist pipeline.
//!
//! Three pieces: a fetcher that downloads one document and writes it to
//! the loot directory, a bounded dispatcher that keeps at most
//! `threads` fetches in flight, and an aggregator that reports each
//! outcome as it completes. One failed document never affects its
//! siblings; the batch always runs to completion.

use crate::models::{Doc, DownloadOutcome};
use futures::stream::{self, Stream, StreamExt};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, warn};

/// Fetch one document and persist it under its derived local name.
///
/// Exactly one attempt: a full body read, then one write into
/// `loot_dir`, silently overwriting any existing file of the same name.
/// Every failure - transport error, non-success status, write error -
/// is captured as a [`DownloadOutcome::Failed`] value; this function
/// never returns an error. A partially written file is not cleaned up.
pub async fn fetch_doc(client: &Client, doc: Doc, loot_dir: &Path) -> DownloadOutcome {
    let local_name = doc.local_name();
    debug!("Fetching {} from {}", local_name, doc.url);

    let body = match fetch_body(client, &doc.url).await {
        Ok(body) => body,
        Err(cause) => {
            return DownloadOutcome::Failed {
                cause: format!("Some error while downloading {}: {}", local_name, cause),
                local_name,
            };
        }
    };

    let path = loot_dir.join(&local_name);
    match tokio::fs::write(&path, &body).await {
        Ok(()) => DownloadOutcome::Saved { local_name },
        Err(e) => DownloadOutcome::Failed {
            cause: format!("Failed to write {}: {}", path.display(), e),
            local_name,
        },
    }
}

async fn fetch_body(client: &Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status));
    }
    let body = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(body.to_vec())
}

/// Run every fetch through a pool of at most `threads` concurrent
/// workers.
///
/// Yields exactly one outcome per input document, in completion order.
/// There is no cancellation: once started, the stream only ends after
/// every submitted fetch has finished.
pub fn download_all<'a>(
    client: &'a Client,
    docs: Vec<Doc>,
    threads: usize,
    loot_dir: &'a Path,
) -> impl Stream<Item = DownloadOutcome> + 'a {
    let threads = threads.max(1);
    stream::iter(docs)
        .map(move |doc| fetch_doc(client, doc, loot_dir))
        .buffer_unordered(threads)
}

/// Tally of one completed download batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub failed: usize,
}

/// Drive a download batch to completion, reporting each outcome as it
/// arrives.
///
/// Prints `Saved {name}` per success and the captured cause per
/// failure. Failures are counted but never stop the batch; the summary
/// is returned once all outcomes are in.
pub async fn run_downloads(
    client: &Client,
    docs: Vec<Doc>,
    threads: usize,
    loot_dir: &Path,
) -> BatchSummary {
    let total = docs.len();
    let mut summary = BatchSummary::default();

    let outcomes = download_all(client, docs, threads, loot_dir);
    futures::pin_mut!(outcomes);

    while let Some(outcome) = outcomes.next().await {
        match outcome {
            DownloadOutcome::Saved { local_name } => {
                println!("Saved {}", local_name);
                summary.saved += 1;
            }
            DownloadOutcome::Failed { local_name, cause } => {
                println!("{}", cause);
                warn!("Failed to download {}", local_name);
                summary.failed += 1;
            }
        }
    }

    debug!("Batch complete: {}/{} saved", summary.saved, total);
    summary
}
