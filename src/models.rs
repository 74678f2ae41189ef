use chrono::{Local, TimeZone};
use serde::Deserialize;
use std::cmp::Reverse;
use std::fmt;

const KB: f64 = 1024.0;
const MB: f64 = 1024.0 * 1024.0;
const GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// One document as returned by the VK `docs.search` API.
///
/// Descriptors live only for the duration of one invocation; the
/// `(id, owner_id)` pair is unique within a single search result set.
#[derive(Debug, Clone, Deserialize)]
pub struct Doc {
    /// Remote document identifier
    pub id: i64,
    /// Identifier of the owning account
    pub owner_id: i64,
    /// Human-readable name; not guaranteed filesystem-safe or unique
    pub title: String,
    /// Size in bytes
    pub size: u64,
    /// Lowercase file extension, used only for filtering
    pub ext: String,
    /// Time-limited download URL from the search response
    pub url: String,
    /// Date the document was added (seconds since epoch)
    #[serde(rename = "date")]
    pub added_at: i64,
}

impl Doc {
    /// Local file name in the form `"{id}_{owner_id}_{title}"`.
    ///
    /// The title is used verbatim; if it contains path separators or
    /// other characters the filesystem rejects, the download fails for
    /// that document only.
    pub fn local_name(&self) -> String {
        format!("{}_{}_{}", self.id, self.owner_id, self.title)
    }

    fn added_date(&self) -> String {
        Local
            .timestamp_opt(self.added_at, 0)
            .single()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.added_at.to_string())
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size as f64;
        write!(
            f,
            "\nTitle: {}\nId: {}\nOwner: {}\nDate of add: {}\nSize: {} Bytes|{:.2} KB|{:.2} MB",
            self.title,
            self.id,
            self.owner_id,
            self.added_date(),
            self.size,
            size / KB,
            size / MB,
        )
    }
}

/// Result of attempting to fetch and persist one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { local_name: String },
    Failed { local_name: String, cause: String },
}

impl DownloadOutcome {
    pub fn local_name(&self) -> &str {
        match self {
            DownloadOutcome::Saved { local_name } => local_name,
            DownloadOutcome::Failed { local_name, .. } => local_name,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }
}

/// Keep only documents whose extension is in `exts`. An empty filter
/// keeps everything.
pub fn filter_by_ext(docs: Vec<Doc>, exts: &[String]) -> Vec<Doc> {
    if exts.is_empty() {
        return docs;
    }
    docs.into_iter()
        .filter(|doc| exts.iter().any(|ext| ext == &doc.ext))
        .collect()
}

/// Sort newest-first by add date.
pub fn sort_by_add_date(docs: &mut [Doc]) {
    docs.sort_by_key(|doc| Reverse(doc.added_at));
}

/// Count and total size of a result set, computed before any download
/// attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub total_files: usize,
    pub total_size: u64,
}

impl SearchSummary {
    pub fn of(docs: &[Doc]) -> Self {
        Self {
            total_files: docs.len(),
            total_size: docs.iter().map(|doc| doc.size).sum(),
        }
    }
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.total_size as f64;
        write!(
            f,
            "\nTotal files: {}\nTotal size: {} Bytes|{:.2} KB|{:.2} MB|{:.2} GB",
            self.total_files,
            self.total_size,
            size / KB,
            size / MB,
            size / GB,
        )
    }
}
