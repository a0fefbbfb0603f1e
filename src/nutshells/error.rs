use thiserror::Error;

use crate::nutshells::services::MAX_PAGE;

/// A single page request that did not yield a people page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page {page}: unexpected status {status}")]
    Status { page: u32, status: u16 },
    #[error("page {page}: request failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("page {page}: malformed people page: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a load run stopped without publishing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("people fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("page {page} is past the {max} page limit", max = MAX_PAGE)]
    PageCeiling { page: u32 },
}
